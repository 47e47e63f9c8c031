//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Rendering only reads the state the
//! controller published; it never triggers work.
//!
//! ## For contributors
//!
//! * The layout is a two-row split: the main area on top and a one-line
//!   status bar at the bottom.
//! * The main area depends on the fetch state: a loading message, the error
//!   message with a retry hint, the article list, or one article's detail.
//! * Colours and styles are defined inline.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, View};
use crate::controller::FetchState;
use crate::news::Article;

const TITLE: &str = " Latest News ";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let show_detail = app.detail_article().is_some();

    match &app.state {
        FetchState::Idle | FetchState::Loading => {
            draw_message(frame, main_area, "Loading latest news…", Color::Yellow, None)
        }
        FetchState::Failed(message) => draw_message(
            frame,
            main_area,
            message,
            Color::Red,
            Some("Press r to retry"),
        ),
        FetchState::Loaded(articles) if articles.is_empty() => draw_message(
            frame,
            main_area,
            "No articles right now.",
            Color::Gray,
            Some("Press r to refresh"),
        ),
        FetchState::Loaded(_) if show_detail => {
            if let Some(article) = app.detail_article() {
                draw_detail(frame, main_area, article);
            }
        }
        FetchState::Loaded(_) => draw_article_list(app, frame, main_area),
    }

    draw_status_bar(app, frame, status_area);
}

/// Centered message in a bordered block, with an optional hint line.
fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color, hint: Option<&str>) {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(message, Style::default().fg(color))),
    ];
    if let Some(hint) = hint {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(TITLE).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the scrollable article list.
fn draw_article_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .state
        .articles()
        .iter()
        .map(|article| {
            let title_style = match article.title {
                Some(_) => Style::default().fg(Color::White),
                None => Style::default().fg(Color::DarkGray),
            };
            let mut spans = vec![Span::styled(article.display_title().to_string(), title_style)];
            if article.url.is_none() {
                spans.push(Span::styled("  (no link)", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render one article in full.
fn draw_detail(frame: &mut Frame, area: Rect, article: &Article) {
    let label = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(Span::styled(
            article.display_title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(article.display_description()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Link:  ", label),
            match &article.url {
                Some(url) => Span::raw(url.as_str()),
                None => Span::styled("none", muted),
            },
        ]),
        Line::from(vec![
            Span::styled("Image: ", label),
            match &article.image_url {
                Some(url) => Span::raw(url.as_str()),
                None => Span::styled("No image", muted),
            },
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Article ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// One-line summary of the fetch state.
fn state_summary(app: &App) -> String {
    match &app.state {
        FetchState::Idle => "Starting…".into(),
        FetchState::Loading => "Loading…".into(),
        FetchState::Failed(_) => "Load failed".into(),
        FetchState::Loaded(articles) => match app.last_updated {
            Some(at) => format!("{} articles, updated {}", articles.len(), at.format("%H:%M")),
            None => format!("{} articles", articles.len()),
        },
    }
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let help = match app.view {
        View::List => "q: quit  ↑/↓: scroll  Enter: read  o: open  r: refresh",
        View::Detail(_) => "Esc: back  o/Enter: open in browser  r: refresh",
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(state_summary(app), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
    ];
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(notice.as_str(), Style::default().fg(Color::Magenta)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::raw(help));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn app_in(state: FetchState) -> App {
        let mut app = App::new();
        app.sync(state);
        app
    }

    #[test]
    fn loading_screen() {
        let text = render(&mut app_in(FetchState::Loading));
        assert!(text.contains("Loading latest news"));
        assert!(text.contains("Loading…"));
    }

    #[test]
    fn idle_renders_as_loading() {
        let text = render(&mut App::new());
        assert!(text.contains("Loading latest news"));
    }

    #[test]
    fn failed_screen_shows_message_and_retry_hint() {
        let mut app = app_in(FetchState::Failed(
            crate::controller::FAILURE_MESSAGE.to_string(),
        ));
        let text = render(&mut app);
        assert!(text.contains("Unable to load news. Please try again."));
        assert!(text.contains("Press r to retry"));
    }

    #[test]
    fn empty_list_has_refresh_hint() {
        let text = render(&mut app_in(FetchState::Loaded(vec![])));
        assert!(text.contains("No articles right now."));
        assert!(text.contains("0 articles"));
    }

    #[test]
    fn list_uses_placeholder_for_missing_title() {
        let mut app = app_in(FetchState::Loaded(vec![
            Article::new(Some("Headline".into()), None, Some("https://e.com".into()), None),
            Article::new(None, None, None, None),
        ]));
        let text = render(&mut app);

        assert!(text.contains("Headline"));
        assert!(text.contains(Article::UNTITLED));
        assert!(text.contains("(no link)"));
        assert!(text.contains("2 articles, updated"));
    }

    #[test]
    fn detail_shows_placeholders_for_absent_fields() {
        let mut app = app_in(FetchState::Loaded(vec![Article::new(
            Some("A".into()),
            None,
            Some("http://x".into()),
            None,
        )]));
        app.open_detail();
        let text = render(&mut app);

        assert!(text.contains(Article::NO_DESCRIPTION));
        assert!(text.contains("http://x"));
        assert!(text.contains("No image"));
        assert!(text.contains("Esc: back"));
    }

    #[test]
    fn notice_appears_in_status_bar() {
        let mut app = app_in(FetchState::Loaded(vec![]));
        app.notice = Some("This article has no link".into());
        assert!(render(&mut app).contains("This article has no link"));
    }
}
