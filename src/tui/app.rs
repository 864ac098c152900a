//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::flow::SubmissionFlow;
use crate::models::SubmissionStatus;
use crate::tui::screens::{
    waitlist::WaitlistField, HelpScreen, HostedScreen, OverviewScreen, ProcessScreen,
    WaitlistScreen,
};
use crate::tui::ui::centered_rect;

/// Application screens
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Overview,
    Process,
    Waitlist,
    Hosted,
    Help,
}

/// Main TUI application state
pub struct App {
    /// Current active screen
    pub current_screen: Screen,
    /// Previous screen for navigation
    pub previous_screen: Option<Screen>,
    /// Waitlist submission state machine
    pub flow: SubmissionFlow,

    // Screen states
    pub overview: OverviewScreen,
    pub process: ProcessScreen,
    pub waitlist: WaitlistScreen,
    pub hosted: HostedScreen,
    pub help: HelpScreen,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    /// Create a new TUI application
    pub fn new(config: &Config) -> Self {
        Self {
            current_screen: Screen::Overview,
            previous_screen: None,
            flow: SubmissionFlow::from_config(config),

            overview: OverviewScreen::new(),
            process: ProcessScreen::new(),
            waitlist: WaitlistScreen::new(),
            hosted: HostedScreen::new(),
            help: HelpScreen::new(),

            should_quit: false,
            show_help_popup: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Ok(event) = crossterm::event::read() {
                if let crossterm::event::Event::Key(key) = event {
                    self.handle_key_event(key).await?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C always quits, even while typing in the form.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        // Global shortcuts. The waitlist form needs plain characters for
        // typing, so these only apply outside it.
        if self.current_screen != Screen::Waitlist {
            match key.code {
                KeyCode::F(1) | KeyCode::Char('?') => {
                    self.show_help_popup = !self.show_help_popup;
                    return Ok(());
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Ok(());
                }
                KeyCode::Esc if self.show_help_popup => {
                    self.show_help_popup = false;
                    return Ok(());
                }
                _ => {}
            }
        }

        if self.show_help_popup {
            return Ok(());
        }

        match self.current_screen {
            Screen::Overview => self.handle_overview_event(key),
            Screen::Process => self.handle_process_event(key),
            Screen::Waitlist => self.handle_waitlist_event(key).await?,
            Screen::Hosted => self.handle_hosted_event(key),
            Screen::Help => self.handle_help_event(key),
        }

        Ok(())
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        match self.current_screen {
            Screen::Overview => self.overview.draw(f, chunks[0]),
            Screen::Process => self.process.draw(f, chunks[0]),
            Screen::Waitlist => self.waitlist.draw(f, chunks[0], self.flow.status()),
            Screen::Hosted => self.hosted.draw(f, chunks[0]),
            Screen::Help => self.help.draw(f, chunks[0]),
        }

        self.draw_status_bar(f, chunks[1]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    /// Draw status bar with current screen info and shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if let Some(ref msg) = self.status_message {
            format!("Status: {}", msg)
        } else if let Some(ref err) = self.error_message {
            format!("Error: {}", err)
        } else {
            format!(
                "Ameen Pay - {} | Esc: Back | q: Quit | F1/?: Help",
                match self.current_screen {
                    Screen::Overview => "Overview",
                    Screen::Process => "How It Works",
                    Screen::Waitlist => "Join the Waitlist",
                    Screen::Hosted => "Hosted Form",
                    Screen::Help => "Help",
                }
            )
        };

        let style = if self.error_message.is_some() {
            Style::default().fg(Color::Red)
        } else if self.status_message.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    /// Draw help popup with context-sensitive shortcuts
    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .block(
                Block::default()
                    .title("Shortcuts")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }

    /// Get context-sensitive help content
    fn get_context_help(&self) -> String {
        let global_help = "Global:\n\
            Esc - Go back\n\
            q - Quit (outside the form)\n\
            Ctrl+C - Quit from anywhere\n\
            F1 / ? - Toggle this popup\n\n";

        let screen_help = match self.current_screen {
            Screen::Overview => {
                "Overview:\n\
                ↑/↓ - Scroll\n\
                p - How It Works\n\
                w - Join the Waitlist\n\
                f - Hosted form link\n\
                h - Help"
            }
            Screen::Process => {
                "How It Works:\n\
                ↑/↓ - Step through the process\n\
                w - Join the Waitlist"
            }
            Screen::Waitlist => {
                "Waitlist Form:\n\
                Tab / Shift+Tab - Move between fields\n\
                Enter - Submit (or open the volume list)\n\
                Backspace - Edit / clear volume selection\n\
                Esc - Back to overview"
            }
            Screen::Hosted => "Hosted Form:\n\
                The link works in any browser.",
            Screen::Help => {
                "Help:\n\
                ↑/↓ - Switch sections\n\
                PageUp/PageDown - Scroll content"
            }
        };

        format!("{}{}", global_help, screen_help)
    }

    /// Navigate to a specific screen
    pub fn navigate_to_screen(&mut self, screen: Screen) {
        self.previous_screen = Some(self.current_screen.clone());
        self.current_screen = screen;
        self.clear_messages();
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    fn handle_navigation_shortcut(&mut self, c: char) {
        match c.to_ascii_lowercase() {
            'o' => self.navigate_to_screen(Screen::Overview),
            'p' => self.navigate_to_screen(Screen::Process),
            'w' => self.navigate_to_screen(Screen::Waitlist),
            'f' => self.navigate_to_screen(Screen::Hosted),
            'h' => self.navigate_to_screen(Screen::Help),
            _ => {}
        }
    }

    fn handle_overview_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.overview.scroll_up(1),
            KeyCode::Down => self.overview.scroll_down(1),
            KeyCode::PageUp => self.overview.scroll_up(10),
            KeyCode::PageDown => self.overview.scroll_down(10),
            KeyCode::Enter => self.navigate_to_screen(Screen::Waitlist),
            KeyCode::Char(c) => self.handle_navigation_shortcut(c),
            _ => {}
        }
    }

    fn handle_process_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.process.steps.previous(),
            KeyCode::Down => self.process.steps.next(),
            KeyCode::Esc => self.navigate_to_screen(Screen::Overview),
            KeyCode::Char(c) => self.handle_navigation_shortcut(c),
            _ => {}
        }
    }

    fn handle_hosted_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate_to_screen(Screen::Overview),
            KeyCode::Char(c) => self.handle_navigation_shortcut(c),
            _ => {}
        }
    }

    fn handle_help_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.help.previous_section(),
            KeyCode::Down => self.help.next_section(),
            KeyCode::PageUp => self.help.scroll_offset = self.help.scroll_offset.saturating_sub(10),
            KeyCode::PageDown => self.help.scroll_offset = self.help.scroll_offset.saturating_add(10),
            KeyCode::Esc => self.navigate_to_screen(Screen::Overview),
            KeyCode::Char(c) => self.handle_navigation_shortcut(c),
            _ => {}
        }
    }

    async fn handle_waitlist_event(&mut self, key: KeyEvent) -> Result<()> {
        // Form controls are inert while a request is outstanding.
        if *self.flow.status() == SubmissionStatus::Submitting {
            return Ok(());
        }

        // After a confirmed success the form is replaced by the thank-you
        // view; only navigation remains.
        if *self.flow.status() == SubmissionStatus::Submitted {
            match key.code {
                KeyCode::Esc => self.navigate_to_screen(Screen::Overview),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return Ok(());
        }

        if self.waitlist.show_volume_dropdown {
            match key.code {
                KeyCode::Up => self.waitlist.volume_list.previous(),
                KeyCode::Down => self.waitlist.volume_list.next(),
                KeyCode::Enter | KeyCode::Esc => self.waitlist.show_volume_dropdown = false,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.waitlist.focus_next_field();
                self.set_status(format!("Focus: {}", self.waitlist.current_field().as_str()));
            }
            KeyCode::BackTab => {
                self.waitlist.focus_previous_field();
                self.set_status(format!("Focus: {}", self.waitlist.current_field().as_str()));
            }
            KeyCode::Enter => {
                if self.waitlist.current_field() == WaitlistField::Volume {
                    self.waitlist.show_volume_dropdown = true;
                    if self.waitlist.volume_list.selected().is_none() {
                        self.waitlist.volume_list.select(Some(0));
                    }
                } else {
                    self.submit_waitlist().await;
                }
            }
            KeyCode::Esc => self.navigate_to_screen(Screen::Overview),
            KeyCode::Char(c) => self.waitlist.handle_char_input(c),
            KeyCode::Backspace => self.waitlist.handle_backspace(),
            KeyCode::Delete => self.waitlist.handle_delete(),
            KeyCode::Left => self.waitlist.handle_cursor_left(),
            KeyCode::Right => self.waitlist.handle_cursor_right(),
            KeyCode::Home => self.waitlist.handle_cursor_home(),
            KeyCode::End => self.waitlist.handle_cursor_end(),
            _ => {}
        }

        Ok(())
    }

    /// Deliver the form to the collector and reflect the outcome
    async fn submit_waitlist(&mut self) {
        self.flow.form = self.waitlist.to_form_state();

        let status = self.flow.submit().await.clone();
        match status {
            SubmissionStatus::Submitted => {
                self.waitlist.clear_inputs();
                self.set_status("You're on the waitlist!".to_string());
            }
            SubmissionStatus::Failed(reason) => {
                self.set_error(reason);
            }
            _ => {}
        }
    }
}
