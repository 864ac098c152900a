//! Waitlist screen: the lead-capture form
//!
//! Holds the editing buffers for the five form fields. The submission state
//! machine itself lives in [`crate::flow::SubmissionFlow`]; the screen only
//! renders its current status and collects input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::{FormState, SubmissionStatus, VolumeBucket};
use crate::tui::ui::{centered_rect, InputField, SelectableList, Styles};

/// Waitlist form fields, in traversal order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitlistField {
    Company,
    Contact,
    Email,
    Phone,
    Volume,
}

impl WaitlistField {
    pub fn as_str(&self) -> &str {
        match self {
            WaitlistField::Company => "Company Name",
            WaitlistField::Contact => "Contact Name",
            WaitlistField::Email => "Email",
            WaitlistField::Phone => "Phone",
            WaitlistField::Volume => "Estimated Monthly Volume",
        }
    }
}

/// Waitlist screen state
pub struct WaitlistScreen {
    pub current_field: usize,
    pub fields: Vec<WaitlistField>,

    pub company_input: InputField,
    pub contact_input: InputField,
    pub email_input: InputField,
    pub phone_input: InputField,

    pub volume_list: SelectableList<VolumeBucket>,
    pub show_volume_dropdown: bool,
}

impl WaitlistScreen {
    pub fn new() -> Self {
        let fields = vec![
            WaitlistField::Company,
            WaitlistField::Contact,
            WaitlistField::Email,
            WaitlistField::Phone,
            WaitlistField::Volume,
        ];

        let mut screen = Self {
            current_field: 0,
            fields,

            company_input: InputField::new("Company Name")
                .with_placeholder("e.g., Acme Realty")
                .required(),
            contact_input: InputField::new("Contact Name")
                .with_placeholder("Who should we reach out to?")
                .required(),
            email_input: InputField::new("Email")
                .with_placeholder("you@agency.ae")
                .required(),
            phone_input: InputField::new("Phone")
                .with_placeholder("+971 ...")
                .required(),

            volume_list: {
                let mut list = SelectableList::new(VolumeBucket::all());
                list.select(None); // No bucket selected by default
                list
            },
            show_volume_dropdown: false,
        };

        screen.update_field_focus();
        screen
    }

    pub fn current_field(&self) -> WaitlistField {
        self.fields[self.current_field]
    }

    pub fn focus_next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.fields.len();
        self.update_field_focus();
    }

    pub fn focus_previous_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.fields.len() - 1
        } else {
            self.current_field - 1
        };
        self.update_field_focus();
    }

    pub fn update_field_focus(&mut self) {
        self.company_input.set_focus(false);
        self.contact_input.set_focus(false);
        self.email_input.set_focus(false);
        self.phone_input.set_focus(false);

        match self.current_field() {
            WaitlistField::Company => self.company_input.set_focus(true),
            WaitlistField::Contact => self.contact_input.set_focus(true),
            WaitlistField::Email => self.email_input.set_focus(true),
            WaitlistField::Phone => self.phone_input.set_focus(true),
            WaitlistField::Volume => {} // Rendered as a dropdown
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.insert_char(c),
            WaitlistField::Contact => self.contact_input.insert_char(c),
            WaitlistField::Email => self.email_input.insert_char(c),
            WaitlistField::Phone => self.phone_input.insert_char(c),
            WaitlistField::Volume => {}
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.delete_char(),
            WaitlistField::Contact => self.contact_input.delete_char(),
            WaitlistField::Email => self.email_input.delete_char(),
            WaitlistField::Phone => self.phone_input.delete_char(),
            // Backspace on the volume field clears the optional selection.
            WaitlistField::Volume => self.volume_list.select(None),
        }
    }

    pub fn handle_delete(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.delete_char_forward(),
            WaitlistField::Contact => self.contact_input.delete_char_forward(),
            WaitlistField::Email => self.email_input.delete_char_forward(),
            WaitlistField::Phone => self.phone_input.delete_char_forward(),
            WaitlistField::Volume => self.volume_list.select(None),
        }
    }

    pub fn handle_cursor_left(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.move_cursor_left(),
            WaitlistField::Contact => self.contact_input.move_cursor_left(),
            WaitlistField::Email => self.email_input.move_cursor_left(),
            WaitlistField::Phone => self.phone_input.move_cursor_left(),
            WaitlistField::Volume => {}
        }
    }

    pub fn handle_cursor_right(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.move_cursor_right(),
            WaitlistField::Contact => self.contact_input.move_cursor_right(),
            WaitlistField::Email => self.email_input.move_cursor_right(),
            WaitlistField::Phone => self.phone_input.move_cursor_right(),
            WaitlistField::Volume => {}
        }
    }

    pub fn handle_cursor_home(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.move_cursor_to_start(),
            WaitlistField::Contact => self.contact_input.move_cursor_to_start(),
            WaitlistField::Email => self.email_input.move_cursor_to_start(),
            WaitlistField::Phone => self.phone_input.move_cursor_to_start(),
            WaitlistField::Volume => {}
        }
    }

    pub fn handle_cursor_end(&mut self) {
        match self.current_field() {
            WaitlistField::Company => self.company_input.move_cursor_to_end(),
            WaitlistField::Contact => self.contact_input.move_cursor_to_end(),
            WaitlistField::Email => self.email_input.move_cursor_to_end(),
            WaitlistField::Phone => self.phone_input.move_cursor_to_end(),
            WaitlistField::Volume => {}
        }
    }

    /// Snapshot the editing buffers into the form read at submission time.
    pub fn to_form_state(&self) -> FormState {
        FormState {
            company_name: self.company_input.value.clone(),
            contact_name: self.contact_input.value.clone(),
            email: self.email_input.value.clone(),
            phone: self.phone_input.value.clone(),
            volume: self.volume_list.selected().copied(),
        }
    }

    /// Reset the editing buffers after a confirmed success.
    pub fn clear_inputs(&mut self) {
        self.company_input.clear();
        self.contact_input.clear();
        self.email_input.clear();
        self.phone_input.clear();
        self.volume_list.select(None);
        self.current_field = 0;
        self.update_field_focus();
    }

    /// Draw the waitlist screen for the given submission status
    pub fn draw(&mut self, f: &mut Frame, area: Rect, status: &SubmissionStatus) {
        if *status == SubmissionStatus::Submitted {
            self.draw_thank_you(f, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status / error line
                Constraint::Length(3), // Company
                Constraint::Length(3), // Contact
                Constraint::Length(3), // Email
                Constraint::Length(3), // Phone
                Constraint::Length(3), // Volume
                Constraint::Min(0),    // Instructions
            ])
            .split(area);

        self.draw_status_line(f, chunks[0], status);

        self.company_input.render(f, chunks[1]);
        self.contact_input.render(f, chunks[2]);
        self.email_input.render(f, chunks[3]);
        self.phone_input.render(f, chunks[4]);
        self.draw_volume_field(f, chunks[5]);
        self.draw_instructions(f, chunks[6]);

        if self.show_volume_dropdown {
            self.draw_volume_dropdown(f, area);
        }
    }

    fn draw_status_line(&self, f: &mut Frame, area: Rect, status: &SubmissionStatus) {
        let (text, style) = match status {
            SubmissionStatus::Submitting => (
                "Submitting your details...".to_string(),
                Styles::info(),
            ),
            SubmissionStatus::Failed(reason) => (reason.clone(), Styles::error()),
            _ => (
                "Be among the first real estate agencies to access commission advances."
                    .to_string(),
                Styles::inactive(),
            ),
        };

        let paragraph = Paragraph::new(text).style(style).block(
            Block::default()
                .title("Join the Waitlist")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );

        f.render_widget(paragraph, area);
    }

    fn draw_volume_field(&self, f: &mut Frame, area: Rect) {
        let is_focused = self.current_field() == WaitlistField::Volume;

        let display = self
            .volume_list
            .selected()
            .map(|b| b.as_str().to_string())
            .unwrap_or_else(|| "Select a range (optional)".to_string());

        let text_style = if self.volume_list.selected().is_some() {
            Styles::default()
        } else {
            Styles::inactive()
        };

        let border_style = if is_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let paragraph = Paragraph::new(display).style(text_style).block(
            Block::default()
                .title("Estimated Monthly Volume (AED)")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(paragraph, area);
    }

    fn draw_volume_dropdown(&mut self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(40, 50, area);
        f.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .volume_list
            .items
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let style = if Some(i) == self.volume_list.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                ListItem::new(bucket.as_str()).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Estimated Monthly Volume")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );

        f.render_stateful_widget(list, popup_area, &mut self.volume_list.state);
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let instructions = vec![
            Line::from(vec![
                Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("/"),
                Span::styled("Shift+Tab", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" move between fields, "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" submits"),
            ]),
            Line::from("Fields marked * are required. Volume range is optional."),
        ];

        let paragraph = Paragraph::new(instructions)
            .wrap(Wrap { trim: true })
            .style(Styles::inactive());

        f.render_widget(paragraph, area);
    }

    fn draw_thank_you(&self, f: &mut Frame, area: Rect) {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "You're on the list!",
                Styles::success().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(
                "Thanks for joining the Ameen Pay waitlist. We'll be in touch as \
                 soon as commission advances open up in your market.",
            ),
        ];

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .title("Join the Waitlist")
                    .borders(Borders::ALL)
                    .border_style(Styles::success()),
            );

        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_traversal_wraps_both_directions() {
        let mut screen = WaitlistScreen::new();
        assert_eq!(screen.current_field(), WaitlistField::Company);

        screen.focus_previous_field();
        assert_eq!(screen.current_field(), WaitlistField::Volume);

        screen.focus_next_field();
        assert_eq!(screen.current_field(), WaitlistField::Company);
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut screen = WaitlistScreen::new();
        for c in "Acme".chars() {
            screen.handle_char_input(c);
        }
        screen.focus_next_field();
        screen.handle_char_input('J');

        let form = screen.to_form_state();
        assert_eq!(form.company_name, "Acme");
        assert_eq!(form.contact_name, "J");
    }

    #[test]
    fn volume_selection_is_optional_and_clearable() {
        let mut screen = WaitlistScreen::new();
        assert_eq!(screen.to_form_state().volume, None);

        screen.volume_list.select(Some(2));
        assert_eq!(
            screen.to_form_state().volume,
            Some(VolumeBucket::From100kTo250k)
        );

        while screen.current_field() != WaitlistField::Volume {
            screen.focus_next_field();
        }
        screen.handle_backspace();
        assert_eq!(screen.to_form_state().volume, None);
    }

    #[test]
    fn clear_inputs_resets_everything() {
        let mut screen = WaitlistScreen::new();
        screen.handle_char_input('A');
        screen.volume_list.select(Some(0));
        screen.focus_next_field();

        screen.clear_inputs();
        assert_eq!(screen.to_form_state(), FormState::default());
        assert_eq!(screen.current_field(), WaitlistField::Company);
    }
}
