use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::charts::{self, ChartCard};
use crate::config::Settings;
use crate::header::{MenuKind, TopHeader};
use crate::layout::{SidebarController, SidebarPlacement, Window};
use crate::model::{Deal, StatCard};
use crate::nav::NavTree;
use crate::renderer;
use crate::seed;
use crate::select::PeriodSelect;
use crate::tasks::TaskList;
use crate::theme::Document;

/// Which panel receives panel-specific keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Charts,
    Deals,
    Tasks,
}

/// Main application state and run loop.
pub struct App {
    pub settings: Settings,
    pub window: Window,
    pub sidebar: SidebarController,
    pub document: Document,
    pub header: TopHeader,
    pub nav: NavTree,
    pub stats: Vec<StatCard>,
    pub charts: Vec<ChartCard>,
    pub selected_chart: usize,
    pub deals: Vec<Deal>,
    pub deal_period: PeriodSelect,
    pub tasks: TaskList,
    pub focus: Focus,
    pub running: bool,
    /// Last error raised by an input handler, shown in the legend bar.
    pub last_error: Option<String>,
}

impl App {
    /// Mount the page for a terminal `columns` wide.
    pub fn new(settings: Settings, columns: u16) -> Self {
        let mut window = Window::new(Window::width_for_columns(
            columns,
            settings.layout.cell_width_px,
        ));
        let sidebar = SidebarController::mount(&mut window, settings.layout.breakpoint_px);
        let document = Document::new(settings.ui.allow_fullscreen);

        let charts = charts::charts_row();
        for card in charts.iter().filter(|c| !c.is_well_formed()) {
            warn!(title = card.title, "chart records do not match its series configuration");
        }

        Self {
            settings,
            window,
            sidebar,
            document,
            header: TopHeader::new(),
            nav: NavTree::new(seed::nav_sections()),
            stats: seed::stat_cards(),
            charts,
            selected_chart: 0,
            deals: seed::deals(),
            deal_period: PeriodSelect::new(seed::DEAL_PERIODS, "nov-2021-dec-2021"),
            tasks: TaskList::new(seed::initial_tasks()),
            focus: Focus::Tasks,
            running: true,
            last_error: None,
        }
    }

    pub fn sidebar_placement(&self) -> SidebarPlacement {
        if self.document.is_fullscreen() {
            return SidebarPlacement::Hidden;
        }
        self.sidebar.placement(self.window.width_px())
    }

    pub fn is_desktop(&self) -> bool {
        self.sidebar.is_desktop(self.window.width_px())
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::with_capacity(4);
        if self.sidebar_placement() != SidebarPlacement::Hidden {
            order.push(Focus::Sidebar);
        }
        order.extend([Focus::Charts, Focus::Deals, Focus::Tasks]);
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Keep focus off a sidebar that is no longer on screen.
    fn settle_focus(&mut self) {
        if self.focus == Focus::Sidebar && self.sidebar_placement() == SidebarPlacement::Hidden {
            self.focus = Focus::Tasks;
        }
    }

    pub fn handle_resize(&mut self, columns: u16) {
        let width_px = Window::width_for_columns(columns, self.settings.layout.cell_width_px);
        debug!(columns, width_px, "terminal resized");
        self.window.resize(width_px);
        self.settle_focus();
    }

    /// Mouse clicks only matter for the mobile overlay: any click outside the
    /// slid-in sidebar lands on the overlay and closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.sidebar_placement() == SidebarPlacement::SlideIn
            && mouse.column >= self.settings.layout.sidebar_width
            && self.sidebar.click_overlay(self.window.width_px())
        {
            self.settle_focus();
        }
    }

    /// Dispatch one key press. Errors from header controls are returned
    /// as-is; the run loop decides what to do with them.
    pub fn handle_key(&mut self, key: KeyEvent) -> crate::error::Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return Ok(());
        }

        // Text fields: Ctrl+U clears, other control chords are not text.
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.header.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.header.blur_search(),
                KeyCode::Char('u') if control => self.header.clear_search(),
                KeyCode::Backspace => self.header.backspace(),
                KeyCode::Char(c) if !control => self.header.type_char(c),
                _ => {}
            }
            return Ok(());
        }

        if self.focus == Focus::Tasks && self.tasks.show_input {
            match key.code {
                KeyCode::Esc => self.tasks.toggle_input(),
                KeyCode::Enter => self.tasks.add_task(),
                KeyCode::Backspace => {
                    self.tasks.input.pop();
                }
                KeyCode::Char('u') if control => self.tasks.input.clear(),
                KeyCode::Char(c) if !control => self.tasks.input.push(c),
                _ => {}
            }
            return Ok(());
        }

        if self.header.open_menu().is_some() {
            match key.code {
                KeyCode::Esc => self.header.close_menu(),
                KeyCode::Char('j') | KeyCode::Down => self.header.menu_down(),
                KeyCode::Char('k') | KeyCode::Up => self.header.menu_up(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.header.choose();
                }
                KeyCode::Char('l') => self.header.toggle_menu(MenuKind::Language),
                KeyCode::Char('p') => self.header.toggle_menu(MenuKind::Account),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.running = false;
                return Ok(());
            }
            KeyCode::Esc => {
                if self.sidebar.click_overlay(self.window.width_px()) {
                    self.settle_focus();
                }
                self.last_error = None;
                return Ok(());
            }
            KeyCode::Char('/') => {
                self.header.focus_search();
                return Ok(());
            }
            KeyCode::Char('m') => {
                // The menu button only exists below the breakpoint.
                if !self.is_desktop() {
                    self.sidebar.toggle();
                    if self.sidebar.is_open() {
                        self.focus = Focus::Sidebar;
                    } else {
                        self.settle_focus();
                    }
                }
                return Ok(());
            }
            KeyCode::Char('d') => {
                self.header.toggle_dark_mode(&mut self.document);
                return Ok(());
            }
            KeyCode::Char('f') => {
                self.header.toggle_fullscreen(&mut self.document)?;
                self.settle_focus();
                return Ok(());
            }
            KeyCode::Char('l') => {
                self.header.toggle_menu(MenuKind::Language);
                return Ok(());
            }
            KeyCode::Char('p') => {
                self.header.toggle_menu(MenuKind::Account);
                return Ok(());
            }
            KeyCode::Tab => {
                self.cycle_focus(true);
                return Ok(());
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Sidebar => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.nav.cursor_down(),
                KeyCode::Char('k') | KeyCode::Up => self.nav.cursor_up(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.nav.activate_selected();
                }
                _ => {}
            },
            Focus::Charts => match key.code {
                KeyCode::Left => {
                    self.selected_chart = self.selected_chart.saturating_sub(1);
                }
                KeyCode::Right => {
                    if self.selected_chart + 1 < self.charts.len() {
                        self.selected_chart += 1;
                    }
                }
                KeyCode::Char('s') | KeyCode::Enter => {
                    if let Some(card) = self.charts.get_mut(self.selected_chart) {
                        card.period.cycle();
                        debug!(chart = card.title, period = card.period.value(), "period changed");
                    }
                }
                _ => {}
            },
            Focus::Deals => {
                if matches!(key.code, KeyCode::Char('s') | KeyCode::Enter) {
                    self.deal_period.cycle();
                    debug!(period = self.deal_period.value(), "deals period changed");
                }
            }
            Focus::Tasks => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.tasks.cursor_down(),
                KeyCode::Char('k') | KeyCode::Up => self.tasks.cursor_up(),
                KeyCode::Char(' ') | KeyCode::Enter => self.tasks.toggle_selected(),
                KeyCode::Char('a') => self.tasks.toggle_input(),
                _ => {}
            },
        }

        Ok(())
    }

    /// Run the main TUI event loop.
    pub fn run(&mut self) -> Result<()> {
        let mouse = self.settings.ui.mouse;
        let poll = Duration::from_millis(self.settings.ui.poll_ms);

        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        if mouse {
            execute!(out, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;

        info!(
            width_px = self.window.width_px(),
            desktop = self.is_desktop(),
            resize_listeners = self.window.listener_count(),
            "dashboard mounted"
        );

        let result = self.event_loop(&mut terminal, poll);

        // Restore the terminal even when the loop failed.
        disable_raw_mode()?;
        if mouse {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        poll: Duration,
    ) -> Result<()> {
        while self.running {
            terminal.draw(|frame| renderer::render_ui(frame, self))?;

            if !event::poll(poll)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Err(e) = self.handle_key(key) {
                        warn!("unhandled error from input handler: {}", e);
                        self.last_error = Some(e.to_string());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(columns, _) => self.handle_resize(columns),
                _ => {}
            }
        }

        info!("dashboard closed");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
