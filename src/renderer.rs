//! Ratatui renderer for the CRM dashboard.
//!
//! This module is purely presentational: it reads the `App` and draws into a
//! Ratatui `Frame`. It never mutates state.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Chart, Clear, Dataset,
    GraphType, Paragraph, Row, Table,
};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::charts::{ChartCard, ChartKind};
use crate::header::{MenuKind, NOTIFICATION_COUNT, USER_INITIALS, USER_NAME, USER_ROLE};
use crate::layout::SidebarPlacement;
use crate::model::{icon_glyph, ColorToken, IconRef, StatCard, TrendDirection};
use crate::nav::{NavNode, NavRow};
use crate::tasks::EMPTY_MESSAGE;
use crate::theme::Palette;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 5;
const MENU_WIDTH: u16 = 22;
const BRAND: &str = "VELZON";

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// An icon glyph padded to two cells plus a separating space.
fn icon_cell(icon: IconRef) -> String {
    let glyph = icon_glyph(icon);
    let pad = 2usize.saturating_sub(UnicodeWidthStr::width(glyph)) + 1;
    format!("{}{}", glyph, " ".repeat(pad))
}

/// Cut `text` to at most `max` display cells, marking the cut with "…".
fn truncate(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Lay `left` and `right` out on one line `width` cells wide, padding the gap.
fn spread<'a>(mut left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let used: usize = left.iter().chain(right.iter()).map(|s| s.width()).sum();
    let gap = width.saturating_sub(used).max(1);
    left.push(Span::raw(" ".repeat(gap)));
    left.extend(right);
    Line::from(left)
}

fn card_block<'a>(title: &'a str, palette: &Palette, focused: bool) -> Block<'a> {
    let border = if focused {
        palette.token(ColorToken::Primary)
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.card).fg(palette.foreground))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Right-aligned "[value ▾]" title for a dropdown on a card border.
fn select_title<'a>(label: &str, palette: &Palette) -> Line<'a> {
    Line::from(Span::styled(
        format!(" [{} \u{25BE}] ", label),
        Style::default().fg(palette.muted),
    ))
    .right_aligned()
}

fn legend_line<'a>(items: &[(&'a str, ColorToken)], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (label, token) in items {
        spans.push(Span::styled(
            " \u{25CF} ",
            Style::default().fg(palette.token(*token)),
        ));
        spans.push(Span::styled(*label, Style::default().fg(palette.muted)));
    }
    Line::from(spans).centered()
}

/// Flatten a buffer into plain text, one line per row, trailing blanks
/// trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    let mut out = String::new();
    for row in buffer.content.chunks(width) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.card).fg(palette.foreground));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(palette.muted);

    // Left: menu button (mobile only) and the search field.
    let mut left: Vec<Span<'static>> = vec![Span::raw(" ")];
    if !app.is_desktop() {
        left.push(Span::styled(
            "\u{2630} ",
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        ));
    }
    left.push(Span::styled("\u{2315} ", muted));
    if app.header.search.is_empty() && !app.header.search_focused {
        left.push(Span::styled("Search...", muted));
    } else {
        left.push(Span::styled(
            app.header.search.clone(),
            Style::default().fg(palette.foreground),
        ));
    }
    if app.header.search_focused {
        left.push(Span::styled(
            "_",
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Right: language, apps, notifications, full-screen, theme, user chip.
    let theme_glyph = if app.document.is_dark() {
        "\u{2600}"
    } else {
        "\u{263E}"
    };
    let mut right: Vec<Span<'static>> = vec![
        Span::styled("\u{2691} ", muted),
        Span::styled("\u{25A6} ", muted),
        Span::styled("\u{2407}", muted),
        Span::styled(
            format!("{} ", NOTIFICATION_COUNT),
            Style::default()
                .fg(palette.token(ColorToken::Red))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{26F6} ", muted),
        Span::styled(format!("{} ", theme_glyph), muted),
        Span::styled(
            format!("({})", USER_INITIALS),
            Style::default()
                .fg(palette.token(ColorToken::Primary))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.is_desktop() {
        right.push(Span::styled(
            format!(" {}", USER_NAME),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        right.push(Span::styled(format!(" {}", USER_ROLE), muted));
    }
    right.push(Span::raw(" "));

    let line = spread(left, right, usize::from(inner.width));
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_menu(frame: &mut Frame, anchor: Rect, app: &App, palette: &Palette) {
    let Some(menu) = app.header.open_menu() else {
        return;
    };

    let label_rows = u16::from(menu.kind.label().is_some());
    let items = menu.kind.items();
    let height = items.len() as u16 + label_rows + 2;
    let width = MENU_WIDTH.min(anchor.width);
    let area = Rect {
        x: anchor.x + anchor.width.saturating_sub(width),
        y: anchor.y + HEADER_HEIGHT.min(anchor.height),
        width,
        height: height.min(anchor.height.saturating_sub(HEADER_HEIGHT)),
    };

    let mut lines = Vec::with_capacity(items.len() + 1);
    if let Some(label) = menu.kind.label() {
        lines.push(Line::from(Span::styled(
            format!(" {}", label),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::BOLD),
        )));
    }
    for (i, item) in items.iter().enumerate() {
        let style = if i == menu.cursor {
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!(" {}", item), style)));
    }

    let title = match menu.kind {
        MenuKind::Language => " Language ",
        MenuKind::Account => " Account ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.card).fg(palette.foreground))
        .title(title);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

fn nav_node_line(
    node: &NavNode,
    depth: usize,
    open: bool,
    under_cursor: bool,
    width: usize,
    palette: &Palette,
) -> Line<'static> {
    let entry = node.entry();
    let mut style = if node.is_highlighted() {
        Style::default()
            .bg(palette.sidebar_active_bg)
            .fg(palette.sidebar_active_fg)
    } else {
        Style::default().fg(palette.sidebar_fg)
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let indent = "  ".to_string() + &"   ".repeat(depth);
    let left = vec![
        Span::styled(indent, style),
        Span::styled(icon_cell(entry.icon), style),
        Span::styled(entry.label, style),
    ];

    let mut right = Vec::new();
    if let Some(ref badge) = entry.badge {
        right.push(Span::styled(
            format!(" {} ", badge.text),
            Style::default()
                .fg(palette.token(badge.color))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if node.is_branch() {
        let chevron = if open { " \u{25BE} " } else { " \u{25B8} " };
        right.push(Span::styled(chevron, style));
    } else {
        right.push(Span::styled(" ", style));
    }

    let mut line = spread(left, right, width);
    line.style = style;
    line
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.sidebar_active_bg))
        .style(Style::default().bg(palette.sidebar_bg).fg(palette.sidebar_fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            format!(" {}", BRAND),
            Style::default()
                .fg(palette.sidebar_active_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" ({}) ", USER_INITIALS),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                USER_NAME,
                Style::default()
                    .fg(palette.sidebar_active_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("      "),
            Span::styled("\u{25CF} ", Style::default().fg(palette.token(ColorToken::Green))),
            Span::raw("Online"),
        ]),
    ];

    let focused = app.focus == Focus::Sidebar;
    let mut selectable = 0usize;
    let mut cursor_line = 0usize;
    for row in app.nav.visible_rows() {
        match row {
            NavRow::Heading(title) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!(" {}", title.to_uppercase()),
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            NavRow::Node { node, depth, open } => {
                let under_cursor = focused && selectable == app.nav.cursor;
                if under_cursor {
                    cursor_line = lines.len();
                }
                lines.push(nav_node_line(node, depth, open, under_cursor, width, palette));
                selectable += 1;
            }
        }
    }

    let height = usize::from(inner.height).max(1);
    let scroll = cursor_line.saturating_sub(height - 1) as u16;
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((scroll, 0)), inner);
}

// ---------------------------------------------------------------------------
// Stats row
// ---------------------------------------------------------------------------

fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCard, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.card).fg(palette.foreground));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(palette.muted);
    let mut right = Vec::new();
    if let Some(indicator) = card.indicator {
        right.push(Span::styled(
            "\u{25CF} ",
            Style::default().fg(palette.token(indicator)),
        ));
    }
    right.push(Span::styled(
        icon_cell(card.icon),
        Style::default().fg(palette.token(card.color)),
    ));

    let mut lines = vec![
        spread(
            vec![Span::styled(card.title.to_uppercase(), muted)],
            right,
            usize::from(inner.width),
        ),
        Line::from(Span::styled(
            card.value,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    match card.trend {
        Some(ref trend) => {
            let (arrow, token) = match trend.direction {
                TrendDirection::Up => ("\u{25B2} ", ColorToken::Green),
                TrendDirection::Down => ("\u{25BC} ", ColorToken::Red),
            };
            let color = Style::default().fg(palette.token(token));
            let mut spans = vec![Span::styled(arrow, color), Span::styled(trend.value, color)];
            if let Some(subtext) = card.subtext {
                spans.push(Span::styled(format!(" {}", subtext), muted));
            }
            lines.push(Line::from(spans));
        }
        None => {
            if let Some(subtext) = card.subtext {
                lines.push(Line::from(Span::styled(subtext, muted)));
            }
        }
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn render_stats_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let n = app.stats.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(app.stats.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (card, rect) in app.stats.iter().zip(columns.iter()) {
        render_stat_card(frame, *rect, card, palette);
    }
}

// ---------------------------------------------------------------------------
// Charts row
// ---------------------------------------------------------------------------

fn render_bar_chart(frame: &mut Frame, area: Rect, card: &ChartCard, palette: &Palette) {
    let key = card.config.value_keys.first().copied().unwrap_or("value");
    let default_color = card
        .config
        .colors
        .first()
        .copied()
        .unwrap_or(ColorToken::Primary);

    let bars: Vec<Bar> = card
        .records
        .iter()
        .map(|record| {
            let color = palette.token(record.fill.unwrap_or(default_color));
            let bar = Bar::default()
                .value(record.value(key).unwrap_or(0.0).round() as u64)
                .label(Line::from(record.category))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(palette.card).bg(color));
            if card.config.tooltip {
                bar
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .max(card.max_value().ceil() as u64);
    frame.render_widget(chart, area);
}

/// Radar data drawn as one group of bars per category.
fn render_radar_chart(frame: &mut Frame, area: Rect, card: &ChartCard, palette: &Palette) {
    let mut chart = BarChart::default()
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1)
        .max(card.max_value().ceil() as u64);

    for record in &card.records {
        let bars: Vec<Bar> = card
            .config
            .value_keys
            .iter()
            .zip(card.config.colors.iter())
            .map(|(key, token)| {
                Bar::default()
                    .value(record.value(key).unwrap_or(0.0).round() as u64)
                    .text_value(String::new())
                    .style(Style::default().fg(palette.token(*token)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(record.category))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

fn render_area_chart(frame: &mut Frame, area: Rect, card: &ChartCard, palette: &Palette) {
    let series: Vec<Vec<(f64, f64)>> = card
        .config
        .value_keys
        .iter()
        .map(|key| card.points(key))
        .collect();

    let datasets: Vec<Dataset> = card
        .config
        .value_keys
        .iter()
        .zip(card.config.colors.iter())
        .zip(series.iter())
        .map(|((key, token), points)| {
            Dataset::default()
                .name(*key)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(palette.token(*token)))
                .data(points)
        })
        .collect();

    let last = card.records.len().saturating_sub(1);
    let muted = Style::default().fg(palette.muted);
    let x_labels: Vec<Span> = [0, last / 2, last]
        .iter()
        .filter_map(|&i| card.records.get(i))
        .map(|r| Span::styled(r.category, muted))
        .collect();

    let max = card.max_value();
    let unit = card.config.unit.unwrap_or("");
    let y_labels: Vec<Span> = [0.0, max / 2.0, max]
        .iter()
        .map(|v| Span::styled(format!("{:.0}{}", v, unit), muted))
        .collect();

    let mut chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled(card.config.category_key, muted))
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels)
                .style(muted),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max])
                .labels(y_labels)
                .style(muted),
        );
    if !card.config.legend {
        chart = chart.legend_position(None);
    }
    frame.render_widget(chart, area);
}

fn render_chart_card(
    frame: &mut Frame,
    area: Rect,
    card: &ChartCard,
    focused: bool,
    palette: &Palette,
) {
    let block = card_block(card.title, palette, focused)
        .title(select_title(card.period.label(), palette));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary_height = u16::from(!card.summary.is_empty());
    // The line chart carries its own legend.
    let legend_height = u16::from(card.config.legend && card.config.kind != ChartKind::Area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height),
            Constraint::Min(1),
            Constraint::Length(legend_height),
        ])
        .split(inner);

    if summary_height > 0 {
        let mut spans = Vec::new();
        for summary in &card.summary {
            spans.push(Span::styled(
                format!(" {}", summary.value),
                Style::default()
                    .fg(palette.token(summary.color))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {} ", summary.label),
                Style::default().fg(palette.muted),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), parts[0]);
    }

    match card.config.kind {
        ChartKind::Bar => render_bar_chart(frame, parts[1], card, palette),
        ChartKind::Radar => render_radar_chart(frame, parts[1], card, palette),
        ChartKind::Area => render_area_chart(frame, parts[1], card, palette),
    }

    if legend_height > 0 {
        let items: Vec<(&str, ColorToken)> = match card.config.kind {
            ChartKind::Bar => card
                .records
                .iter()
                .map(|r| (r.category, r.fill.unwrap_or(ColorToken::Primary)))
                .collect(),
            _ => card
                .config
                .value_keys
                .iter()
                .copied()
                .zip(card.config.colors.iter().copied())
                .collect(),
        };
        frame.render_widget(Paragraph::new(legend_line(&items, palette)), parts[2]);
    }
}

fn render_charts_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let n = app.charts.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(app.charts.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (i, (card, rect)) in app.charts.iter().zip(columns.iter()).enumerate() {
        let focused = app.focus == Focus::Charts && app.selected_chart == i;
        render_chart_card(frame, *rect, card, focused, palette);
    }
}

// ---------------------------------------------------------------------------
// Deals table
// ---------------------------------------------------------------------------

fn render_sales_table(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = card_block("Deals Status", palette, app.focus == Focus::Deals)
        .title(select_title(app.deal_period.label(), palette));

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Last Contacted"),
        Cell::from("Sales Representative"),
        Cell::from("Status"),
        Cell::from(Line::from("Deal Value").right_aligned()),
    ])
    .style(
        Style::default()
            .fg(palette.muted)
            .bg(palette.highlight_bg)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .deals
        .iter()
        .map(|deal| {
            Row::new(vec![
                Cell::from(Span::styled(
                    deal.name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    deal.last_contacted,
                    Style::default().fg(palette.muted),
                )),
                Cell::from(Line::from(vec![
                    Span::styled(
                        format!("({}) ", deal.rep.avatar_text()),
                        Style::default().fg(palette.token(ColorToken::Primary)),
                    ),
                    Span::raw(deal.rep.name),
                ])),
                Cell::from(Span::styled(
                    format!(" {} ", deal.status.label()),
                    Style::default()
                        .fg(palette.token(deal.status.color()))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(
                    Line::from(Span::styled(
                        deal.value,
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .right_aligned(),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(18),
        Constraint::Percentage(30),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Task list
// ---------------------------------------------------------------------------

fn render_task_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Tasks;
    let add_title = Line::from(Span::styled(
        " [a] \u{2295} Add Task ",
        Style::default()
            .fg(palette.token(ColorToken::Green))
            .add_modifier(Modifier::BOLD),
    ))
    .right_aligned();
    let block = card_block("My Tasks", palette, focused).title(add_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tasks = &app.tasks;
    let width = usize::from(inner.width);
    let muted = Style::default().fg(palette.muted);
    let bold = Style::default()
        .fg(palette.foreground)
        .add_modifier(Modifier::BOLD);

    let mut header_lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(tasks.remaining_count().to_string(), bold),
        Span::styled(" of ", muted),
        Span::styled(tasks.len().to_string(), bold),
        Span::styled(" remaining", muted),
    ])];

    if tasks.show_input {
        let prompt = if tasks.input.is_empty() {
            Span::styled("New task description...", muted)
        } else {
            Span::styled(tasks.input.clone(), Style::default().fg(palette.foreground))
        };
        header_lines.push(Line::from(vec![
            Span::styled(" \u{203A} ", bold),
            prompt,
            Span::styled(
                "_",
                Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled("  Enter to add", muted),
        ]));
    }

    let mut lines = header_lines;
    if tasks.shows_empty_state() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(EMPTY_MESSAGE, muted)).centered());
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
        return;
    }

    let fixed = lines.len();
    for (i, task) in tasks.tasks().iter().enumerate() {
        let check = if task.completed { "[x] " } else { "[ ] " };
        let (text_style, date_style) = if task.completed {
            (
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::CROSSED_OUT),
                muted,
            )
        } else {
            (Style::default().fg(palette.foreground), Style::default().fg(palette.foreground))
        };

        let date_width = UnicodeWidthStr::width(task.due_date.as_str());
        let room = width.saturating_sub(date_width + 7);
        let mut line = spread(
            vec![
                Span::raw(" "),
                Span::styled(check, Style::default().fg(palette.token(ColorToken::Primary))),
                Span::styled(truncate(&task.description, room), text_style),
            ],
            vec![Span::styled(task.due_date.clone(), date_style), Span::raw(" ")],
            width,
        );
        if focused && i == tasks.cursor {
            line.style = Style::default().bg(palette.highlight_bg);
        }
        lines.push(line);
    }

    let height = usize::from(inner.height).max(1);
    let cursor_line = fixed + tasks.cursor;
    let scroll = cursor_line.saturating_sub(height - 1) as u16;
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((scroll, 0)), inner);
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

fn render_page(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(STATS_HEIGHT),
            Constraint::Percentage(45),
            Constraint::Min(6),
        ])
        .split(area);

    let title = spread(
        vec![Span::styled(
            " CRM Dashboard",
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )],
        vec![
            Span::styled("Dashboards", Style::default().fg(palette.muted)),
            Span::styled(" / ", Style::default().fg(palette.border)),
            Span::styled("CRM ", Style::default().fg(palette.foreground)),
        ],
        usize::from(chunks[0].width),
    );
    frame.render_widget(Paragraph::new(title), chunks[0]);

    render_stats_row(frame, chunks[1], app, palette);
    render_charts_row(frame, chunks[2], app, palette);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(chunks[3]);
    render_sales_table(frame, bottom[0], app, palette);
    render_task_list(frame, bottom[1], app, palette);
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

/// Key-binding bar at the bottom of the screen, with the last handler error
/// appended when there is one.
fn render_legend(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let muted = Style::default().fg(palette.muted);
    let mut spans: Vec<Span<'static>> = if app.header.search_focused {
        vec![
            Span::styled(
                " / ",
                Style::default()
                    .fg(palette.card)
                    .bg(palette.token(ColorToken::Primary))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  typing into search  (Enter/Esc to leave)", muted),
        ]
    } else if app.focus == Focus::Tasks && app.tasks.show_input {
        vec![Span::styled(" New task: Enter add  Esc cancel", muted)]
    } else if app.header.open_menu().is_some() {
        vec![Span::styled(" j/k move  Enter choose  Esc close", muted)]
    } else {
        let panel = match app.focus {
            Focus::Sidebar => "j/k move  Enter open/close",
            Focus::Charts => "\u{2190}/\u{2192} chart  s period",
            Focus::Deals => "s period",
            Focus::Tasks => "j/k move  Space done  a add",
        };
        let mut spans = vec![Span::styled(
            format!(
                " q quit  Tab focus  {}  / search  d theme  f full-screen  l lang  p account",
                panel
            ),
            muted,
        )];
        if !app.is_desktop() {
            spans.push(Span::styled("  m menu", muted));
        }
        spans
    };

    if let Some(ref err) = app.last_error {
        spans.push(Span::styled(
            format!("  [!] {}", err),
            Style::default().fg(palette.token(ColorToken::Red)),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ---------------------------------------------------------------------------
// Main render entry point
// ---------------------------------------------------------------------------

/// Top-level render function. Call this from the main loop once per frame.
pub fn render_ui(frame: &mut Frame, app: &App) {
    let palette = app.document.palette();
    let size = frame.area();
    frame.buffer_mut().set_style(
        size,
        Style::default().bg(palette.background).fg(palette.foreground),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    let body = chunks[0];
    let legend_area = chunks[1];

    let placement = app.sidebar_placement();
    let sidebar_width = app.settings.layout.sidebar_width.min(body.width);

    let content = if placement == SidebarPlacement::Docked {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(body);
        render_sidebar(frame, columns[0], app, &palette);
        columns[1]
    } else {
        body
    };

    if app.document.is_fullscreen() {
        render_page(frame, content, app, &palette);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(content);
        render_header(frame, rows[0], app, &palette);
        render_page(frame, rows[1], app, &palette);
    }

    if placement == SidebarPlacement::SlideIn {
        // Dim everything behind the slid-in sidebar.
        frame
            .buffer_mut()
            .set_style(body, Style::default().bg(palette.overlay).fg(palette.muted));
        let rect = Rect {
            width: sidebar_width,
            ..body
        };
        frame.render_widget(Clear, rect);
        render_sidebar(frame, rect, app, &palette);
    }

    render_menu(frame, content, app, &palette);
    render_legend(frame, legend_area, app, &palette);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_ui(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn desktop() -> App {
        App::new(Settings::default(), 160)
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longe…");
        assert_eq!(truncate("abc", 0), "…");
    }

    #[test]
    fn test_spread_fills_width() {
        let line = spread(vec![Span::raw("left")], vec![Span::raw("right")], 20);
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_spread_keeps_one_space_when_tight() {
        let line = spread(vec![Span::raw("left")], vec![Span::raw("right")], 3);
        assert_eq!(line.width(), 10);
    }

    #[test]
    fn test_icon_cell_is_three_cells() {
        for name in ["bell", "heart", "unknown"] {
            assert_eq!(UnicodeWidthStr::width(icon_cell(IconRef(name)).as_str()), 3);
        }
    }

    #[test]
    fn test_desktop_page_renders_all_panels() {
        let app = desktop();
        let screen = draw(&app, 160, 48);
        assert!(screen.contains("CRM Dashboard"));
        assert!(screen.contains("Dashboards / CRM"));
        assert!(screen.contains(BRAND));
        assert!(screen.contains("CAMPAIGN SENT"));
        assert!(screen.contains("$489.4k"));
        assert!(screen.contains("Sales Forecast"));
        assert!(screen.contains("Balance Overview"));
        assert!(screen.contains("Absternet LLC"));
        assert!(screen.contains("Deal Won"));
        assert!(screen.contains("4 of 7 remaining"));
    }

    #[test]
    fn test_mobile_hides_sidebar_until_opened() {
        let app = App::new(Settings::default(), 80);
        let screen = draw(&app, 80, 40);
        assert!(!screen.contains(BRAND));
        assert!(screen.contains("CRM Dashboard"));

        app.sidebar.toggle();
        let screen = draw(&app, 80, 40);
        assert!(screen.contains(BRAND));
    }

    #[test]
    fn test_fullscreen_drops_chrome() {
        let mut app = desktop();
        app.document.request_fullscreen().unwrap();
        let screen = draw(&app, 160, 48);
        assert!(!screen.contains(BRAND));
        assert!(!screen.contains("Search..."));
        assert!(screen.contains("CRM Dashboard"));
    }

    #[test]
    fn test_empty_task_state() {
        let mut app = desktop();
        app.tasks = crate::tasks::TaskList::new(Vec::new());
        let screen = draw(&app, 160, 48);
        assert!(screen.contains(EMPTY_MESSAGE));
        assert!(screen.contains("0 of 0 remaining"));
    }

    #[test]
    fn test_last_error_shown_in_legend() {
        let mut app = desktop();
        app.last_error = Some("full-screen request refused".to_string());
        let screen = draw(&app, 160, 48);
        assert!(screen.contains("[!] full-screen request refused"));
    }

    #[test]
    fn test_menu_popup_lists_items() {
        let mut app = desktop();
        app.header.toggle_menu(MenuKind::Account);
        let screen = draw(&app, 160, 48);
        assert!(screen.contains("My Account"));
        assert!(screen.contains("Log out"));
    }

    #[test]
    fn test_dark_theme_renders() {
        let mut app = desktop();
        app.header.toggle_dark_mode(&mut app.document);
        let screen = draw(&app, 160, 48);
        assert!(screen.contains("CRM Dashboard"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = desktop();
        draw(&app, 20, 6);
        let app = App::new(Settings::default(), 10);
        app.sidebar.toggle();
        draw(&app, 10, 4);
    }
}
