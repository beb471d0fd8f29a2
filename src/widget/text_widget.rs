use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;

use crate::widget::{build_buffer, Focusable};

/// Single-line text entry for option input and save-name prompts.
#[derive(Clone, Debug)]
pub struct TextInputState {
    pub selected: bool,
    length: i8,
    input: String,
    name: String,
    input_padding: i8
}

pub fn build_text_input(length: i8, name: String, input_padding: i8) -> TextInputState {
    TextInputState { selected: false, length, input: String::new(), name, input_padding }
}

impl TextInputState {
    pub fn buffer_full(&self) -> bool {
        self.input.chars().count() >= self.length as usize
    }

    pub fn add_char(&mut self, c: char) {
        if !self.buffer_full() {
            self.input.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if !self.input.is_empty() {
            self.input.pop();
        }
    }

    pub fn get_input(&self) -> String {
        self.input.clone()
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Focusable for TextInputState {
    fn focus(&mut self) {
        self.selected = true;
    }

    fn unfocus(&mut self) {
        self.selected = false;
    }
}

impl StatefulWidget for TextInputState {
    type State = TextInputState;

    fn render(self, area: Rect, buf: &mut Buffer, _state: &mut Self::State) {
        let input_start_index = area.left() + self.name.chars().count() as u16 + self.input_padding as u16;
        let current_cursor_index = input_start_index + self.input.chars().count() as u16;
        let max_index = input_start_index + self.length as u16;

        buf.set_string(area.left(), area.top(), self.name.clone(), Style::default());
        let input_buffer = build_buffer(self.length, &self.input);
        buf.set_string(input_start_index, area.top(), input_buffer, Style::default().add_modifier(Modifier::REVERSED));
        if self.selected && current_cursor_index < max_index {
            buf[(current_cursor_index, area.top())]
                .set_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::UNDERLINED));
        } else if current_cursor_index == max_index {
            let selected_input_row = Rect::new(input_start_index, area.top(), self.length as u16, 1);
            buf.set_style(selected_input_row, Style::default().add_modifier(Modifier::REVERSED | Modifier::UNDERLINED));
        }
    }
}
