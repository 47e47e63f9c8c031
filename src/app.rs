use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

use crate::controller::FetchState;
use crate::news::{Article, ArticleId};

/// Which screen is showing once articles are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    /// Full view of one article from the current list.
    Detail(ArticleId),
}

/// Everything the UI needs to draw one frame.
pub struct App {
    /// Latest state received from the controller.
    pub state: FetchState,
    /// List selection state for scrolling.
    pub list_state: ListState,
    pub view: View,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// One-off notice for the status bar, cleared by the next key press.
    pub notice: Option<String>,
    /// When the current article list arrived.
    pub last_updated: Option<DateTime<Local>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            list_state: ListState::default(),
            view: View::List,
            quit: false,
            notice: None,
            last_updated: None,
        }
    }

    /// Adopt a new controller state.
    ///
    /// A fresh article list replaces the old one wholesale; the selection is
    /// clamped to it.  Ids are not stable across fetches, so an open detail
    /// view closes as soon as its article is no longer in the list.
    pub fn sync(&mut self, state: FetchState) {
        if let FetchState::Loaded(articles) = &state {
            self.last_updated = Some(Local::now());
            let selected = match (self.list_state.selected(), articles.len()) {
                (_, 0) => None,
                (Some(i), len) => Some(i.min(len - 1)),
                (None, _) => Some(0),
            };
            self.list_state.select(selected);
        }
        self.state = state;

        if self.detail_article().is_none() {
            self.view = View::List;
        }
    }

    pub fn articles(&self) -> &[Article] {
        self.state.articles()
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.list_state.selected().and_then(|i| self.articles().get(i))
    }

    /// The article shown by the detail view, if it is open.
    pub fn detail_article(&self) -> Option<&Article> {
        match self.view {
            View::Detail(id) => self.articles().iter().find(|a| a.id == id),
            View::List => None,
        }
    }

    /// The article an action applies to: the open one, else the selected one.
    pub fn current_article(&self) -> Option<&Article> {
        self.detail_article().or_else(|| self.selected_article())
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.articles().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.articles().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.articles().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.articles().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    // -- views ---------------------------------------------------------------

    /// Show the selected article in full.  No-op without a selection.
    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_article().map(|a| a.id) {
            self.view = View::Detail(id);
        }
    }

    /// Leave the detail view, or quit when already on the list.
    pub fn back(&mut self) {
        match self.view {
            View::Detail(_) => self.view = View::List,
            View::List => self.quit = true,
        }
    }
}
