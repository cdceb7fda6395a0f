//! Virtual file browser.
//!
//! Folders are a fixed in-memory tree; files are links to pages that open in
//! the host browser. Nothing here touches the real file system.

use std::collections::BTreeMap;
use std::io;

use rand::Rng;
use ratatui::layout::Rect;

use crate::error::DesktopError;

pub const HOME: &str = "home";
pub const PLACEHOLDER_PAGE: &str = "placeholder.html";

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// Folders listed in the sidebar, with their labels.
pub const SIDEBAR: [(&str, &str); 5] = [
    ("home", "Home"),
    ("documents", "Documents"),
    ("downloads", "Downloads"),
    ("pictures", "Pictures"),
    ("trash", "Trash"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTarget {
    /// Key of another folder in the tree.
    Folder(String),
    /// Page path relative to the files base.
    Page(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub icon: &'static str,
    pub target: EntryTarget,
}

impl Entry {
    fn folder(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: FOLDER_ICON,
            target: EntryTarget::Folder(key.to_string()),
        }
    }

    fn file(name: &str, icon: &'static str, page: &str) -> Self {
        Self {
            name: name.to_string(),
            icon,
            target: EntryTarget::Page(page.to_string()),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.target, EntryTarget::Folder(_))
    }
}

/// Opens a page outside the desktop.
pub trait PageOpener {
    fn open_page(&self, target: &str) -> io::Result<()>;
}

/// Hands pages to the system web browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebBrowserOpener;

impl PageOpener for WebBrowserOpener {
    fn open_page(&self, target: &str) -> io::Result<()> {
        webbrowser::open(target)
    }
}

/// Result of activating an entry in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigated(String),
    Opened(String),
}

#[derive(Debug, Clone)]
pub struct FileBrowser {
    tree: BTreeMap<String, Vec<Entry>>,
    current: String,
    sidebar_active: Option<String>,
    base: String,
}

impl Default for FileBrowser {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FILES_BASE)
    }
}

impl FileBrowser {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            tree: default_tree(),
            current: HOME.to_string(),
            sidebar_active: Some(HOME.to_string()),
            base: base.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn entries(&self) -> &[Entry] {
        self.tree
            .get(&self.current)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn sidebar_active(&self) -> Option<&str> {
        self.sidebar_active.as_deref()
    }

    /// Path shown in the title bar.
    pub fn hint(&self) -> String {
        if self.current == HOME {
            "/home/arch".to_string()
        } else {
            format!("/home/arch/{}", self.current)
        }
    }

    /// Switches folder from the sidebar, highlighting its entry there.
    pub fn select_sidebar(&mut self, folder: &str) -> bool {
        if !self.navigate(folder) {
            return false;
        }
        self.sidebar_active = Some(folder.to_string());
        true
    }

    /// Switches to `folder`. Unknown folders leave the view unchanged.
    pub fn navigate(&mut self, folder: &str) -> bool {
        if !self.tree.contains_key(folder) {
            tracing::debug!(folder, "unknown folder");
            return false;
        }
        self.current = folder.to_string();
        self.sidebar_active = SIDEBAR
            .iter()
            .any(|(key, _)| *key == folder)
            .then(|| folder.to_string());
        true
    }

    /// Opens the entry at `index`: folders navigate, files open their page.
    pub fn activate(
        &mut self,
        index: usize,
        opener: &dyn PageOpener,
    ) -> Result<Option<Activation>, DesktopError> {
        let Some(entry) = self.entries().get(index) else {
            return Ok(None);
        };
        match entry.target.clone() {
            EntryTarget::Folder(key) => {
                self.navigate(&key);
                // Entering a subfolder from the grid clears the sidebar mark.
                self.sidebar_active = None;
                Ok(Some(Activation::Navigated(key)))
            }
            EntryTarget::Page(page) => {
                let resolved = self.open_target(&page, opener)?;
                Ok(Some(Activation::Opened(resolved)))
            }
        }
    }

    pub fn resolve(&self, page: &str) -> String {
        let page = if page.is_empty() { PLACEHOLDER_PAGE } else { page };
        format!("{}/{}", self.base.trim_end_matches('/'), page)
    }

    /// Opens a page in the host browser, returning the resolved location.
    pub fn open_target(&self, page: &str, opener: &dyn PageOpener) -> Result<String, DesktopError> {
        let target = self.resolve(page);
        match opener.open_page(&target) {
            Ok(()) => {
                tracing::debug!(%target, "page opened");
                Ok(target)
            }
            Err(source) => {
                tracing::warn!(%target, error = %source, "could not open page");
                Err(DesktopError::PopupBlocked { target, source })
            }
        }
    }

    /// Inserts "New File NN.txt" at the top of the current folder.
    pub fn add_placeholder<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Entry {
        let name = format!("New File {}.txt", rng.gen_range(10..100));
        let folder = self.tree.entry(self.current.clone()).or_default();
        folder.insert(0, Entry::file(&name, FILE_ICON, PLACEHOLDER_PAGE));
        &folder[0]
    }

    /// Sorts the current folder by name, ignoring case.
    pub fn sort(&mut self) {
        if let Some(folder) = self.tree.get_mut(&self.current) {
            folder.sort_by_cached_key(|entry| entry.name.to_lowercase());
        }
    }
}

/// Where the parts of the file browser sit inside its window body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilesLayout {
    pub toolbar: Rect,
    pub new_file_button: Rect,
    pub sort_button: Rect,
    pub sidebar: Rect,
    pub grid: Rect,
}

pub const SIDEBAR_WIDTH: u16 = 14;
pub const NEW_FILE_LABEL: &str = "[+ New File]";
pub const SORT_LABEL: &str = "[Sort]";

impl FilesLayout {
    pub fn new(body: Rect) -> Self {
        let toolbar = Rect::new(body.x, body.y, body.width, body.height.min(1));
        let new_file_button = Rect::new(
            toolbar.x.saturating_add(1),
            toolbar.y,
            NEW_FILE_LABEL.len() as u16,
            toolbar.height,
        )
        .intersection(toolbar);
        let sort_button = Rect::new(
            new_file_button.right().saturating_add(1),
            toolbar.y,
            SORT_LABEL.len() as u16,
            toolbar.height,
        )
        .intersection(toolbar);
        let rest_y = body.y.saturating_add(toolbar.height.saturating_add(1));
        let rest_h = body.bottom().saturating_sub(rest_y);
        let sidebar_w = SIDEBAR_WIDTH.min(body.width);
        let sidebar = Rect::new(body.x, rest_y, sidebar_w, rest_h);
        let grid = Rect::new(
            body.x.saturating_add(sidebar_w).saturating_add(1),
            rest_y,
            body.width.saturating_sub(sidebar_w.saturating_add(1)),
            rest_h,
        );
        Self {
            toolbar,
            new_file_button,
            sort_button,
            sidebar,
            grid,
        }
    }
}

/// What a click inside the file browser's body lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesClick {
    NewFile,
    Sort,
    Sidebar(usize),
    Entry(usize),
}

impl FilesLayout {
    pub fn click(&self, col: u16, row: u16, entries: usize) -> Option<FilesClick> {
        let pos = ratatui::layout::Position::new(col, row);
        if self.new_file_button.contains(pos) {
            return Some(FilesClick::NewFile);
        }
        if self.sort_button.contains(pos) {
            return Some(FilesClick::Sort);
        }
        if self.sidebar.contains(pos) {
            let index = usize::from(row - self.sidebar.y);
            return (index < SIDEBAR.len()).then_some(FilesClick::Sidebar(index));
        }
        if self.grid.contains(pos) {
            let index = usize::from(row - self.grid.y);
            return (index < entries).then_some(FilesClick::Entry(index));
        }
        None
    }
}

fn default_tree() -> BTreeMap<String, Vec<Entry>> {
    let file = Entry::file;
    let mut tree = BTreeMap::new();
    tree.insert(
        "home".to_string(),
        vec![
            Entry::folder("Projects", "projects"),
            Entry::folder("Reciepts", "reciepts"),
            Entry::folder("Passwords", "passwords"),
            Entry::folder("Logs", "logs"),
            file("notes.txt", "📄", "home/notes.html"),
            file("readme.txt", "📄", "home/readme.html"),
            file("todo.txt", "📄", "home/todo.html"),
            file("config.json", "⚙️", "home/config.html"),
            file("wallpaper.png", "🖼️", "home/wallpaper.html"),
            file("archive.zip", "🗜️", "home/archive.html"),
            file("backup.tar.gz", "📦", "home/backup.html"),
        ],
    );
    tree.insert(
        "documents".to_string(),
        vec![
            file("incident_report.txt", "📄", "documents/incident_report.html"),
            file("employee_notes.txt", "📄", "documents/employee_notes.html"),
            file("auth.log", "📄", "documents/auth_log.html"),
            file("staff_directory.txt", "📄", "documents/staff_directory.html"),
            file("meeting_minutes.txt", "📄", "documents/meeting_minutes.html"),
            file("budget.xlsx", "📊", "documents/budget.html"),
            file("presentation.pptx", "📊", "documents/presentation.html"),
        ],
    );
    tree.insert(
        "downloads".to_string(),
        vec![
            file("installer.exe", "💿", "downloads/installer.html"),
            file("leaks.zip", "🗜️", "downloads/leaks.html"),
            file("music.mp3", "🎵", "downloads/music.html"),
            file("video.mp4", "🎬", "downloads/video.html"),
            file("report.pdf", "📄", "downloads/report.html"),
        ],
    );
    tree.insert(
        "pictures".to_string(),
        vec![
            file("selfie.png", "🖼️", "pictures/selfie.html"),
            file("office.jpg", "🖼️", "pictures/office.html"),
            file("whiteboard.png", "🖼️", "pictures/whiteboard.html"),
            file("diagram.png", "🖼️", "pictures/diagram.html"),
        ],
    );
    tree.insert(
        "trash".to_string(),
        vec![
            file("old_passwords.txt", "📄", "trash/old_passwords.html"),
            file("deleted_log.txt", "📄", "trash/deleted_log.html"),
            file("temp.txt", "📄", "trash/temp.html"),
        ],
    );
    tree.insert(
        "projects".to_string(),
        vec![
            file("todo.txt", "📄", "projects/todo.html"),
            file("prototype.fig", "📦", "projects/prototype.html"),
        ],
    );
    tree.insert(
        "reciepts".to_string(),
        vec![
            file("receipt_001.txt", "📄", "reciepts/receipt_001.html"),
            file("receipt_002.txt", "📄", "reciepts/receipt_002.html"),
        ],
    );
    tree.insert(
        "passwords".to_string(),
        vec![
            file("admin_password.txt", "📄", "passwords/admin_password.html"),
            file("user_password.txt", "📄", "passwords/user_password.html"),
        ],
    );
    tree.insert(
        "logs".to_string(),
        vec![
            file("system.log", "📄", "logs/system.html"),
            file("network.log", "📄", "logs/network.html"),
        ],
    );
    tree
}
