//! Right-click menu on the bare desktop.

use crate::constants::{CONTEXT_MENU_HEIGHT, CONTEXT_MENU_WIDTH};
use crate::geometry::{Point, Size, WindowRect};

const ITEM_TOP_PADDING: i32 = 16;
const ITEM_HEIGHT: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewFile,
    Refresh,
    ChangeWallpaper,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::NewFile, MenuItem::Refresh, MenuItem::ChangeWallpaper];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::NewFile => "New File",
            MenuItem::Refresh => "Refresh",
            MenuItem::ChangeWallpaper => "Change Wallpaper",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    origin: Option<Point>,
}

impl ContextMenu {
    /// Opens at the pointer, pulled left and up so the menu fits the
    /// viewport. Only the far edges are considered.
    pub fn open_at(&mut self, pointer: Point, viewport: Size) -> Point {
        let origin = Point::new(
            pointer.x.min(viewport.width - CONTEXT_MENU_WIDTH),
            pointer.y.min(viewport.height - CONTEXT_MENU_HEIGHT),
        );
        self.origin = Some(origin);
        origin
    }

    pub fn close(&mut self) {
        self.origin = None;
    }

    pub fn is_open(&self) -> bool {
        self.origin.is_some()
    }

    pub fn rect(&self) -> Option<WindowRect> {
        self.origin.map(|origin| {
            WindowRect::from_parts(origin, Size::new(CONTEXT_MENU_WIDTH, CONTEXT_MENU_HEIGHT))
        })
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect().is_some_and(|rect| rect.contains(point))
    }

    pub fn item_rect(&self, item: MenuItem) -> Option<WindowRect> {
        let rect = self.rect()?;
        let index = MenuItem::ALL.iter().position(|i| *i == item)? as i32;
        Some(WindowRect::new(
            rect.x,
            rect.y + ITEM_TOP_PADDING + index * ITEM_HEIGHT,
            rect.width,
            ITEM_HEIGHT,
        ))
    }

    pub fn item_at(&self, point: Point) -> Option<MenuItem> {
        MenuItem::ALL
            .into_iter()
            .find(|item| self.item_rect(*item).is_some_and(|r| r.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280, 800);

    #[test]
    fn opens_at_pointer_when_it_fits() {
        let mut menu = ContextMenu::default();
        assert_eq!(menu.open_at(Point::new(300, 200), VIEWPORT), Point::new(300, 200));
        assert!(menu.is_open());
    }

    #[test]
    fn clamps_to_far_edges() {
        let mut menu = ContextMenu::default();
        assert_eq!(
            menu.open_at(Point::new(1250, 790), VIEWPORT),
            Point::new(1060, 620)
        );
        assert!(menu.contains(Point::new(1279, 799)));
    }

    #[test]
    fn items_stack_below_padding() {
        let mut menu = ContextMenu::default();
        menu.open_at(Point::new(100, 100), VIEWPORT);
        assert_eq!(menu.item_at(Point::new(110, 105)), None);
        assert_eq!(menu.item_at(Point::new(110, 116)), Some(MenuItem::NewFile));
        assert_eq!(menu.item_at(Point::new(110, 150)), Some(MenuItem::Refresh));
        assert_eq!(menu.item_at(Point::new(110, 180)), Some(MenuItem::ChangeWallpaper));
        assert_eq!(menu.item_at(Point::new(110, 230)), None);
        menu.close();
        assert_eq!(menu.item_at(Point::new(110, 116)), None);
    }
}
