//! Interactive catalog browser.
//!
//! Layout: search bar, filter/sort status line, result list, statistics
//! footer, and a modal detail overlay with section tabs. All browsing state
//! lives in [`ViewState`] and [`DetailView`]; the render functions below are
//! pure over that state.
//!
//! Keys: typing edits the search query (debounced); `Esc`/`Enter` moves focus
//! to the results; `/` returns to the search bar. In the results: arrows or
//! `j`/`k` move, `Enter` opens the detail modal, digits toggle quick
//! categories, `r`/`h`/`t` cycle the criticality/hive/tools facets, `s`
//! cycles sort, `c` clears all filters, `q` quits. In the modal: `[`/`]` or
//! the arrow keys switch sections, `Esc` closes, `Enter` accepts the record
//! and exits.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use crate::core::artifact::{ArtifactRecord, Criticality, HIVE_PREFIXES};
use crate::core::dataset::Dataset;
use crate::engine::detail::{DetailView, Section, render_section};
use crate::engine::sort::SortKey;
use crate::engine::state::ViewState;
use crate::error::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Quick-category toggles bound to the digit keys, mirroring the priority
/// categories of the catalog schema.
const QUICK_CATEGORIES: [&str; 8] = [
    "program-execution",
    "browser-activity",
    "file-operations",
    "user-behaviour",
    "persistence-methods",
    "system-modifications",
    "network-infrastructure",
    "security-monitoring",
];

const SORT_CYCLE: [Option<SortKey>; 6] = [
    None,
    Some(SortKey::Title),
    Some(SortKey::TitleDesc),
    Some(SortKey::Category),
    Some(SortKey::Criticality),
    Some(SortKey::Recent),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Results,
}

pub struct BrowseTui {
    view: ViewState,
    detail: DetailView,
    focus: Focus,
    query: String,
    list_state: ListState,
    /// Record accepted with Enter from the detail view, handed back to the
    /// CLI after the terminal is restored.
    accepted: Option<ArtifactRecord>,
    should_quit: bool,
}

impl BrowseTui {
    pub fn new(dataset: Dataset, query: Option<String>, category: Option<String>) -> Self {
        let mut view = ViewState::new(dataset);
        if let Some(category) = category {
            view.set_category(Some(category));
        }
        let query = query.unwrap_or_default();
        if !query.is_empty() {
            view.set_search(query.clone(), Instant::now());
            // Apply the initial query immediately rather than waiting out the
            // debounce window.
            view.tick(Instant::now() + crate::engine::state::SEARCH_DEBOUNCE);
        }

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            view,
            detail: DetailView::default(),
            focus: Focus::Search,
            query,
            list_state,
            accepted: None,
            should_quit: false,
        }
    }

    fn selected_result(&self) -> Option<usize> {
        let pos = self.list_state.selected()?;
        self.view.result_indices().get(pos).copied()
    }

    fn clamp_selection(&mut self) {
        let count = self.view.visible_count();
        if count == 0 {
            self.list_state.select(None);
        } else {
            let pos = self.list_state.selected().unwrap_or(0).min(count - 1);
            self.list_state.select(Some(pos));
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let count = self.view.visible_count();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, count as i64 - 1);
        #[allow(clippy::cast_sign_loss)]
        self.list_state.select(Some(next as usize));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.detail.is_open() {
            self.handle_detail_key(key.code);
        } else {
            match self.focus {
                Focus::Search => self.handle_search_key(key.code),
                Focus::Results => self.handle_results_key(key.code),
            }
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.view.set_search(self.query.clone(), Instant::now());
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.view.set_search(self.query.clone(), Instant::now());
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::Results;
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-10),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::Enter => {
                if let Some(index) = self.selected_result() {
                    self.detail.open(index);
                }
            }
            KeyCode::Char(c @ '1'..='8') => {
                let slot = (c as usize) - ('1' as usize);
                self.view.toggle_category(QUICK_CATEGORIES[slot]);
                self.clamp_selection();
            }
            KeyCode::Char('s') => {
                self.cycle_sort();
            }
            KeyCode::Char('r') => {
                let next = match self.view.filters().criticality {
                    None => Some(Criticality::High),
                    Some(Criticality::High) => Some(Criticality::Medium),
                    Some(Criticality::Medium) => Some(Criticality::Low),
                    Some(Criticality::Low) => None,
                };
                self.view.set_criticality(next);
                self.clamp_selection();
            }
            KeyCode::Char('h') => {
                self.cycle_hive();
                self.clamp_selection();
            }
            KeyCode::Char('t') => {
                let next = match self.view.filters().has_tools {
                    None => Some(true),
                    Some(true) => Some(false),
                    Some(false) => None,
                };
                self.view.set_has_tools(next);
                self.clamp_selection();
            }
            KeyCode::Char('c') => {
                self.query.clear();
                self.view.clear_filters();
                self.clamp_selection();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.detail.close(),
            KeyCode::Left | KeyCode::Char('[') => {
                if let Some(section) = self.detail.section() {
                    self.detail.select(section.prev());
                }
            }
            KeyCode::Right | KeyCode::Char(']') => {
                if let Some(section) = self.detail.section() {
                    self.detail.select(section.next());
                }
            }
            KeyCode::Enter => {
                if let Some(record) = self
                    .detail
                    .record_index()
                    .and_then(|i| self.view.artifact(i))
                {
                    self.accepted = Some(record.clone());
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    fn cycle_sort(&mut self) {
        let current = self.view.sort_key();
        let pos = SORT_CYCLE.iter().position(|k| *k == current).unwrap_or(0);
        self.view.set_sort(SORT_CYCLE[(pos + 1) % SORT_CYCLE.len()]);
        self.clamp_selection();
    }

    fn cycle_hive(&mut self) {
        let next = match self.view.filters().hive.as_deref() {
            None => Some(HIVE_PREFIXES[0]),
            Some(current) => HIVE_PREFIXES
                .iter()
                .position(|h| *h == current)
                .and_then(|pos| HIVE_PREFIXES.get(pos + 1))
                .copied(),
        };
        self.view.set_hive(next.map(str::to_string));
    }

    fn render(&mut self, frame: &mut Frame) {
        let [search_area, status_area, results_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_search(frame, search_area);
        self.render_status(frame, status_area);
        self.render_results(frame, results_area);
        self.render_footer(frame, footer_area);

        if self.detail.is_open() {
            self.render_detail(frame);
        }
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Search && !self.detail.is_open() {
            Style::new().fg(Color::Yellow)
        } else {
            Style::new()
        };
        let search = Paragraph::new(self.view.search_text())
            .block(Block::bordered().title(" Search ").border_style(border_style));
        frame.render_widget(search, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let filters = self.view.filters();
        let mut parts: Vec<String> = Vec::new();
        if let Some(category) = &filters.category {
            parts.push(format!("category={category}"));
        }
        if let Some(criticality) = filters.criticality {
            parts.push(format!("criticality={}", criticality.label()));
        }
        if let Some(hive) = &filters.hive {
            parts.push(format!("hive={hive}"));
        }
        if let Some(has_tools) = filters.has_tools {
            parts.push(format!("tools={}", if has_tools { "yes" } else { "no" }));
        }
        let sort = self
            .view
            .sort_key()
            .map_or("none", SortKey::label);
        parts.push(format!("sort={sort}"));

        let status = Line::from(vec![
            Span::styled(
                format!(" {} shown ", self.view.visible_count()),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::raw(parts.join("  ")),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .view
            .results()
            .map(|record| {
                let criticality = record.criticality().map_or("unrated", |c| c.label());
                let line = Line::from(vec![
                    Span::styled(
                        record.title.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  [{}] [{criticality}]  ", record.category)),
                    Span::styled(
                        record.primary_path().to_string(),
                        Style::new().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Artifacts "))
            .highlight_style(Style::new().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let stats = &self.view.dataset().statistics;
        let footer = Line::from(format!(
            " {} artifacts | {} categories | {} high criticality | / search  s sort  c clear  q quit",
            stats.total,
            self.view.dataset().categories.len(),
            stats.high_criticality(),
        ));
        frame.render_widget(
            Paragraph::new(footer).style(Style::new().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_detail(&self, frame: &mut Frame) {
        let Some((record, section)) = self
            .detail
            .record_index()
            .and_then(|i| self.view.artifact(i))
            .zip(self.detail.section())
        else {
            return;
        };

        let area = centered_rect(frame.area(), 80, 80);
        frame.render_widget(Clear, area);

        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

        let tabs = Tabs::new(Section::ALL.iter().map(|s| s.label()))
            .select(section.index())
            .highlight_style(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(Block::bordered().title(format!(" {} ", record.title)));
        frame.render_widget(tabs, tabs_area);

        let body = render_section(record, section).join("\n");
        let paragraph = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(format!(" {} ", section.label())));
        frame.render_widget(paragraph, body_area);
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    horizontal
}

/// Run the browser. Returns the record accepted with Enter from the detail
/// view, if any. The terminal is restored before returning, including on
/// error.
pub fn run_browse_tui(
    dataset: Dataset,
    query: Option<String>,
    category: Option<String>,
) -> Result<Option<ArtifactRecord>> {
    let mut terminal = ratatui::init();
    let mut app = BrowseTui::new(dataset, query, category);

    let result = loop {
        if app.view.tick(Instant::now()) {
            app.clamp_selection();
        }
        if let Err(err) = terminal.draw(|frame| app.render(frame)) {
            break Err(err.into());
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => app.handle_key(key),
                Ok(_) => {}
                Err(err) => break Err(err.into()),
            },
            Ok(false) => {}
            Err(err) => break Err(err.into()),
        }

        if app.should_quit {
            break Ok(app.accepted.take());
        }
    };

    ratatui::restore();
    result
}
