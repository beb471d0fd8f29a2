/// The live, user-edited list of choices. Ordered, duplicate free by exact
/// string match. The engine persists a serialized copy after every mutation.
#[derive(Clone, Debug)]
pub struct OptionList {
    entries: Vec<String>
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    EmptyInput,
    Duplicate
}

/// Counts reported back to the user after a bulk add.
#[derive(Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    pub added: usize,
    pub skipped: usize
}

const BATCH_DELIMITERS: [char; 4] = [',', '\n', ';', '|'];

impl OptionList {
    pub fn new() -> OptionList {
        OptionList { entries: Vec::new() }
    }

    /// Restores a previously persisted list. Entries are trusted as-is, the
    /// duplicate rule was already enforced when they were inserted.
    pub fn from_entries(entries: Vec<String>) -> OptionList {
        OptionList { entries }
    }

    pub fn add(&mut self, value: &str) -> AddOutcome {
        let value = value.trim();
        if value.is_empty() {
            return AddOutcome::EmptyInput;
        }
        if self.contains(value) {
            return AddOutcome::Duplicate;
        }
        self.entries.push(value.to_owned());
        AddOutcome::Added
    }

    /// Splits raw input on comma / newline / semicolon / pipe, trims each
    /// token, drops empties and adds whatever isn't already present.
    /// Duplicates within the batch itself also count as skipped.
    pub fn add_many(&mut self, raw: &str) -> BatchOutcome {
        let mut outcome = BatchOutcome { added: 0, skipped: 0 };
        for token in raw.split(|c| BATCH_DELIMITERS.contains(&c)) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if self.contains(token) {
                outcome.skipped += 1;
            } else {
                self.entries.push(token.to_owned());
                outcome.added += 1;
            }
        }
        outcome
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    pub fn get(&self, index: usize) -> Option<&String> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{AddOutcome, BatchOutcome, OptionList};

    #[test]
    fn test_add_appends_in_order() {
        // GIVEN an empty option list
        let mut options = OptionList::new();

        // WHEN we add two distinct values
        assert_eq!(AddOutcome::Added, options.add("Pho"));
        assert_eq!(AddOutcome::Added, options.add("Pizza"));

        // THEN they appear in insertion order
        assert_eq!(&["Pho".to_owned(), "Pizza".to_owned()], options.entries());
    }

    #[test]
    fn test_add_trims_whitespace() {
        let mut options = OptionList::new();
        assert_eq!(AddOutcome::Added, options.add("  Ramen  "));
        assert_eq!(Some(&"Ramen".to_owned()), options.get(0));
    }

    #[test]
    fn test_add_rejects_empty_input() {
        // GIVEN an empty option list
        let mut options = OptionList::new();

        // WHEN we add blank input
        // THEN it is rejected and nothing is stored
        assert_eq!(AddOutcome::EmptyInput, options.add("   "));
        assert!(options.is_empty());
    }

    #[test]
    fn test_add_is_idempotent_against_duplicates() {
        // GIVEN a list already containing a value
        let mut options = OptionList::new();
        options.add("Pho");

        // WHEN we add the same value again
        let outcome = options.add("Pho");

        // THEN the second add is rejected and exactly one instance remains
        assert_eq!(AddOutcome::Duplicate, outcome);
        assert_eq!(1, options.len());
    }

    #[test]
    fn test_add_many_drops_empties_and_skips_batch_duplicates() {
        // GIVEN an empty option list
        let mut options = OptionList::new();

        // WHEN we bulk add a raw string with empty tokens and a repeat
        let outcome = options.add_many("A, B,, A ; C");

        // THEN the empties are dropped, the repeated "A" is the only skip
        assert_eq!(BatchOutcome { added: 3, skipped: 1 }, outcome);
        assert_eq!(&["A".to_owned(), "B".to_owned(), "C".to_owned()], options.entries());
    }

    #[test]
    fn test_add_many_splits_on_all_delimiters() {
        let mut options = OptionList::new();
        let outcome = options.add_many("one,two\nthree;four|five");
        assert_eq!(BatchOutcome { added: 5, skipped: 0 }, outcome);
        assert_eq!(5, options.len());
    }

    #[test]
    fn test_add_many_skips_values_already_present() {
        // GIVEN a list already containing "B"
        let mut options = OptionList::new();
        options.add("B");

        // WHEN we bulk add a batch overlapping it
        let outcome = options.add_many("A, B, C");

        // THEN the overlap is skipped and the rest are added
        assert_eq!(BatchOutcome { added: 2, skipped: 1 }, outcome);
        assert_eq!(&["B".to_owned(), "A".to_owned(), "C".to_owned()], options.entries());
    }

    #[test]
    fn test_add_many_with_nothing_valid() {
        let mut options = OptionList::new();
        let outcome = options.add_many(" , ; | ");
        assert_eq!(BatchOutcome { added: 0, skipped: 0 }, outcome);
        assert!(options.is_empty());
    }

    #[test]
    fn test_remove_at_index() {
        // GIVEN a list of three values
        let mut options = OptionList::new();
        options.add_many("A, B, C");

        // WHEN we remove the middle one
        let removed = options.remove(1);

        // THEN the removed value is returned and order is preserved
        assert_eq!(Some("B".to_owned()), removed);
        assert_eq!(&["A".to_owned(), "C".to_owned()], options.entries());
    }

    #[test]
    fn test_remove_out_of_bounds_is_a_no_op() {
        let mut options = OptionList::new();
        options.add("A");
        assert_eq!(None, options.remove(5));
        assert_eq!(1, options.len());
    }

    #[test]
    fn test_clear_empties_the_list() {
        let mut options = OptionList::new();
        options.add_many("A, B, C");
        options.clear();
        assert!(options.is_empty());
    }
}
