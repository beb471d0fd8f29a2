use std::collections::BTreeMap;

/// Named snapshots of option lists. Saving copies the live list at that
/// moment; loading hands back a copy without disturbing the archive. The
/// map is ordered by name so the saved-lists panel renders deterministically.
#[derive(Clone, Debug, Default)]
pub struct ListArchive {
    lists: BTreeMap<String, Vec<String>>
}

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    EmptyName,
    EmptySnapshot
}

impl ListArchive {
    pub fn new() -> ListArchive {
        ListArchive { lists: BTreeMap::new() }
    }

    pub fn from_lists(lists: BTreeMap<String, Vec<String>>) -> ListArchive {
        ListArchive { lists }
    }

    /// Stores a snapshot under the given name, silently overwriting any
    /// existing entry of the same name.
    pub fn save(&mut self, name: &str, snapshot: &[String]) -> SaveOutcome {
        let name = name.trim();
        if name.is_empty() {
            return SaveOutcome::EmptyName;
        }
        if snapshot.is_empty() {
            return SaveOutcome::EmptySnapshot;
        }
        self.lists.insert(name.to_owned(), snapshot.to_vec());
        SaveOutcome::Saved
    }

    /// A missing name is a defined no-op here; the caller surfaces a notice.
    pub fn load(&self, name: &str) -> Option<Vec<String>> {
        self.lists.get(name).cloned()
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.lists.remove(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }

    pub fn lists(&self) -> &BTreeMap<String, Vec<String>> {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::archive::{ListArchive, SaveOutcome};

    fn snapshot(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_save_and_load_restores_the_snapshot() {
        // GIVEN an archive holding a snapshot saved as "week1"
        let mut archive = ListArchive::new();
        let saved = snapshot(&["A", "B"]);
        assert_eq!(SaveOutcome::Saved, archive.save("week1", &saved));

        // WHEN we load it back
        let loaded = archive.load("week1");

        // THEN the exact ordered sequence is restored
        assert_eq!(Some(saved), loaded);
    }

    #[test]
    fn test_save_rejects_empty_name() {
        let mut archive = ListArchive::new();
        assert_eq!(SaveOutcome::EmptyName, archive.save("  ", &snapshot(&["A"])));
        assert!(archive.is_empty());
    }

    #[test]
    fn test_save_rejects_empty_snapshot() {
        let mut archive = ListArchive::new();
        assert_eq!(SaveOutcome::EmptySnapshot, archive.save("week1", &[]));
        assert!(archive.is_empty());
    }

    #[test]
    fn test_save_overwrites_existing_name() {
        // GIVEN a name that is already taken
        let mut archive = ListArchive::new();
        archive.save("week1", &snapshot(&["A"]));

        // WHEN we save a different snapshot under the same name
        archive.save("week1", &snapshot(&["B", "C"]));

        // THEN the newer snapshot silently replaces the old one
        assert_eq!(Some(snapshot(&["B", "C"])), archive.load("week1"));
        assert_eq!(1, archive.len());
    }

    #[test]
    fn test_load_missing_name_is_none() {
        let archive = ListArchive::new();
        assert_eq!(None, archive.load("nope"));
    }

    #[test]
    fn test_delete_removes_only_the_named_entry() {
        // GIVEN two saved lists
        let mut archive = ListArchive::new();
        archive.save("a", &snapshot(&["1"]));
        archive.save("b", &snapshot(&["2"]));

        // WHEN we delete one of them
        assert!(archive.delete("a"));

        // THEN only the other remains
        assert_eq!(None, archive.load("a"));
        assert!(archive.load("b").is_some());
    }

    #[test]
    fn test_delete_missing_name_reports_false() {
        let mut archive = ListArchive::new();
        assert!(!archive.delete("nope"));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut archive = ListArchive::new();
        archive.save("dinner", &snapshot(&["A"]));
        archive.save("breakfast", &snapshot(&["B"]));
        assert_eq!(vec!["breakfast".to_owned(), "dinner".to_owned()], archive.names());
    }
}
