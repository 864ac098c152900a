//! Overview screen: hero, problem, and solution content
//!
//! Static presentation with no behavioral contract beyond scrolling.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::Styles;

pub struct OverviewScreen {
    pub scroll_offset: u16,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.draw_hero(f, chunks[0]);
        self.draw_narrative(f, chunks[1]);
    }

    fn draw_hero(&self, f: &mut Frame, area: Rect) {
        let hero = vec![
            Line::from(Span::styled(
                "Get Your Real Estate Commissions Today",
                Styles::title().add_modifier(Modifier::BOLD),
            )),
            Line::from(
                "Stop waiting months for commission payments. Ameen Pay provides \
                 instant commission advances to real estate agencies in the UAE.",
            ),
            Line::from(Span::styled(
                "Starting in UAE - Expanding to MENA",
                Styles::info(),
            )),
        ];

        let paragraph = Paragraph::new(hero)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Ameen Pay")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            );

        f.render_widget(paragraph, area);
    }

    fn draw_narrative(&self, f: &mut Frame, area: Rect) {
        let narrative = vec![
            Line::from(Span::styled("The Cashflow Challenge", Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Delayed Payments: ", Styles::info()),
                Span::raw(
                    "Developers can delay commission payments for months, creating \
                     cashflow issues for agencies.",
                ),
            ]),
            Line::from(vec![
                Span::styled("Operational Strain: ", Styles::info()),
                Span::raw(
                    "Agencies struggle to cover salaries, marketing, and other \
                     expenses while waiting for commissions.",
                ),
            ]),
            Line::from(vec![
                Span::styled("Growth Limitations: ", Styles::info()),
                Span::raw(
                    "Limited cashflow restricts your ability to invest in growth \
                     and new opportunities.",
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Our Solution", Styles::title())),
            Line::from(""),
            Line::from(
                "Ameen Pay bridges the gap between earning your commission and \
                 receiving payment. Get immediate access to your hard-earned \
                 commissions without waiting for developers.",
            ),
            Line::from(""),
            Line::from(Span::styled("  + Instant liquidity for your business", Styles::success())),
            Line::from(Span::styled("  + Maintain healthy cashflow", Styles::success())),
            Line::from(Span::styled("  + Invest in growth opportunities", Styles::success())),
            Line::from(Span::styled("  + Focus on selling, not waiting", Styles::success())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Before: ", Styles::error()),
                Span::raw("wait 2-6 months for payment.  "),
                Span::styled("With Ameen Pay: ", Styles::success()),
                Span::raw("get paid in days."),
            ]),
        ];

        let paragraph = Paragraph::new(narrative)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll_offset, 0))
            .block(
                Block::default()
                    .title("Why Ameen Pay")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );

        f.render_widget(paragraph, area);
    }
}
