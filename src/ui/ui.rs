use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::menu::{Menu, ToList};
use crate::options::OptionList;
use crate::translations::TextTable;
use crate::ui::confetti::Confetti;
use crate::widget::text_widget::TextInputState;

/// Which panel receives navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    Options,
    Saved
}

/// What the text input currently collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    AddOption,
    SaveName
}

/// Everything the renderer needs for one frame, projected out of the engine.
/// Keeping this a plain data bundle is what lets the engine be exercised
/// against a TestBackend without a real terminal.
pub struct ViewModel<'a> {
    pub texts: &'static TextTable,
    pub input: TextInputState,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub options: &'a OptionList,
    pub options_index: usize,
    pub highlight: Option<usize>,
    pub spinning: bool,
    pub saved_menu: &'a Menu,
    pub result: Option<&'a str>,
    pub toast: Option<&'a str>,
    pub confirm: Option<String>,
    pub confetti: Option<&'a Confetti>
}

pub fn render(frame: &mut Frame, view: &mut ViewModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1)
        ])
        .split(frame.area());

    draw_header(frame, view, rows[0]);
    draw_input(frame, view, rows[1]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);
    draw_options(frame, view, panels[0]);
    draw_saved_lists(frame, view, panels[1]);

    draw_result(frame, view, rows[3]);
    draw_toast(frame, view, rows[4]);
    draw_usage(frame, view, rows[5]);

    if let Some(confetti) = view.confetti {
        frame.render_widget(confetti, panels[0]);
    }

    if let Some(message) = view.confirm.clone() {
        draw_confirm_dialog(frame, message, frame.area());
    }
}

fn draw_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(view.texts.title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(view.texts.subtitle, Style::default().fg(Color::DarkGray)))
    ]);
    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame, view: &mut ViewModel, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = match view.input_mode {
        InputMode::AddOption => view.texts.add_prompt,
        InputMode::SaveName => view.texts.save_prompt
    };
    let mut input_widget = view.input.clone();
    input_widget.set_name(prompt.to_string());
    let mut input_state = input_widget.clone();
    frame.render_stateful_widget(input_widget, inner, &mut input_state);
}

fn draw_options(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let title = format!("{} ({})", view.texts.options_title, view.options.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if view.options.is_empty() {
        let empty = Paragraph::new(view.texts.no_options)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view.options.entries()
        .iter()
        .enumerate()
        .map(|(i, value)| ListItem::new(format!("{}. {}", i + 1, value)))
        .collect();

    // The spin highlight takes precedence over the focus cursor
    let (selected, highlight_style) = if view.spinning {
        (view.highlight, Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED | Modifier::BOLD))
    } else if view.focus == Focus::Options {
        (Some(view.options_index), Style::default().fg(Color::Red))
    } else {
        (None, Style::default())
    };

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White))
        .highlight_style(highlight_style);
    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_saved_lists(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(view.texts.saved_lists_title);

    if view.saved_menu.is_empty() {
        let empty = Paragraph::new(view.texts.saved_none)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = view.saved_menu.to_list().block(block);
    let mut state = ListState::default();
    if view.focus == Focus::Saved {
        state.select(Some(view.saved_menu.selection));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_result(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let line = match view.result {
        Some(result) => Line::from(vec![
            Span::raw(view.texts.result_text),
            Span::raw(" "),
            Span::styled(result, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        ]),
        None => Line::from("")
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_toast(frame: &mut Frame, view: &ViewModel, area: Rect) {
    if let Some(message) = view.toast {
        let toast = Paragraph::new(message).style(Style::default().fg(Color::Yellow));
        frame.render_widget(toast, area);
    }
}

fn draw_usage(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let usage = Paragraph::new(view.texts.usage).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(usage, area);
}

fn draw_confirm_dialog(frame: &mut Frame, message: String, frame_area: Rect) {
    let width = (message.chars().count() as u16 + 6).min(frame_area.width);
    let area = center_rect(width, 5, frame_area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let message_area = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);
    frame.render_widget(Paragraph::new(message), message_area);

    let keys_text = "[Y] / [N]";
    let keys_area = Rect::new(area.x + 2, area.y + 3, area.width.saturating_sub(4), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(keys_text, Style::default().add_modifier(Modifier::BOLD))),
        keys_area
    );
}

fn center_rect(width: u16, height: u16, frame_area: Rect) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect::new(
        frame_area.x + (frame_area.width - width) / 2,
        frame_area.y + (frame_area.height - height) / 2,
        width,
        height
    )
}
