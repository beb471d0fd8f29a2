use ratatui::style::{Color, Style};
use ratatui::widgets::{List, ListItem};

use crate::archive::ListArchive;

/// Navigable list of saved-list names for the archive panel.
pub struct Menu {
    pub entries: Vec<String>,
    pub selection: usize
}

pub trait Selection {
    fn select_up(&mut self);
    fn select_down(&mut self);
}

pub trait ToList {
    fn to_list(&self) -> List;
}

impl Menu {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_entry(&self) -> Option<&String> {
        self.entries.get(self.selection)
    }
}

impl Selection for Menu {
    fn select_up(&mut self) {
        if self.selection > 0 {
            self.selection -= 1;
        }
    }

    fn select_down(&mut self) {
        if !self.entries.is_empty() && self.selection < self.entries.len() - 1 {
            self.selection += 1;
        }
    }
}

impl ToList for Menu {
    fn to_list(&self) -> List {
        let items: Vec<ListItem> = self.entries.iter().cloned().map(ListItem::new).collect();
        List::new(items)
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Red))
            .highlight_symbol("-> ")
    }
}

pub fn build_archive_menu(archive: &ListArchive) -> Menu {
    Menu { entries: archive.names(), selection: 0 }
}
