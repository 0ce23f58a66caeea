//! Responsive shell: viewport width, resize subscriptions, and the mobile
//! sidebar controller.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info};

type Listener = Box<dyn FnMut(u32)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// The host window as far as layout cares: a width in logical pixels and a
/// list of resize listeners.
pub struct Window {
    width_px: u32,
    listeners: Rc<ListenerList>,
    next_id: u64,
}

impl Window {
    pub fn new(width_px: u32) -> Self {
        Self {
            width_px,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: 0,
        }
    }

    /// Width of a terminal `columns` wide with `cell_width_px` per column,
    /// saturating at `u32::MAX`.
    pub fn width_for_columns(columns: u16, cell_width_px: u32) -> u32 {
        u32::from(columns).saturating_mul(cell_width_px)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Register `listener` for resize notifications. It stays registered
    /// until the returned guard is dropped.
    pub fn subscribe(&mut self, listener: impl FnMut(u32) + 'static) -> ResizeSubscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        ResizeSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Record the new width and notify every listener, in subscription order.
    pub fn resize(&mut self, width_px: u32) {
        self.width_px = width_px;
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(width_px);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Keeps a resize listener registered; dropping it unregisters.
pub struct ResizeSubscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Where the sidebar sits for the current state and viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarPlacement {
    /// Desktop: docked, content offset by the sidebar width.
    Docked,
    /// Mobile, open: slid in over the content with an overlay behind it.
    SlideIn,
    /// Mobile, closed: translated off-screen.
    Hidden,
}

/// Owns the "mobile sidebar open" flag and the resize listener that forces
/// it closed on desktop-width viewports.
pub struct SidebarController {
    open: Rc<Cell<bool>>,
    breakpoint_px: u32,
    _resize: ResizeSubscription,
}

impl SidebarController {
    /// Mount against `window`: subscribe to resizes and run the initial check.
    pub fn mount(window: &mut Window, breakpoint_px: u32) -> Self {
        Self::mount_with_state(window, breakpoint_px, false)
    }

    /// Mount with an explicit starting flag. The initial check still runs, so
    /// `open` only survives on a mobile-width viewport.
    pub fn mount_with_state(window: &mut Window, breakpoint_px: u32, open: bool) -> Self {
        let open = Rc::new(Cell::new(open));

        let flag = Rc::clone(&open);
        let resize = window.subscribe(move |width_px| {
            if width_px >= breakpoint_px && flag.get() {
                info!(width_px, "desktop width reached, closing mobile sidebar");
                flag.set(false);
            }
        });

        if window.width_px() >= breakpoint_px {
            open.set(false);
        }

        Self {
            open,
            breakpoint_px,
            _resize: resize,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.set(!self.open.get());
        debug!(open = self.open.get(), "mobile sidebar toggled");
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn is_desktop(&self, width_px: u32) -> bool {
        width_px >= self.breakpoint_px
    }

    pub fn placement(&self, width_px: u32) -> SidebarPlacement {
        if self.is_desktop(width_px) {
            SidebarPlacement::Docked
        } else if self.is_open() {
            SidebarPlacement::SlideIn
        } else {
            SidebarPlacement::Hidden
        }
    }

    /// The dimming overlay exists only while open on a mobile viewport.
    pub fn overlay_visible(&self, width_px: u32) -> bool {
        self.placement(width_px) == SidebarPlacement::SlideIn
    }

    /// Clicking the overlay closes the sidebar. Returns whether the click
    /// landed on it.
    pub fn click_overlay(&self, width_px: u32) -> bool {
        if self.overlay_visible(width_px) {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_for_columns() {
        assert_eq!(Window::width_for_columns(96, 8), 768);
        assert_eq!(Window::width_for_columns(0, 8), 0);
        assert_eq!(Window::width_for_columns(160, 100_000_000), u32::MAX);
    }

    #[test]
    fn test_toggle_and_close() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount(&mut window, 768);
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        sidebar.close();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount_with_state(&mut window, 768, true);
        assert!(sidebar.is_open());

        window.resize(1024);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_resize_always_closed_at_or_above_breakpoint() {
        for width in [768, 769, 1024, 4000] {
            for start_open in [false, true] {
                let mut window = Window::new(320);
                let sidebar = SidebarController::mount_with_state(&mut window, 768, start_open);
                window.resize(width);
                assert!(!sidebar.is_open(), "width {} start {}", width, start_open);
            }
        }
    }

    #[test]
    fn test_resize_below_breakpoint_keeps_state() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount_with_state(&mut window, 768, true);
        window.resize(767);
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_initial_check_on_desktop() {
        let mut window = Window::new(1280);
        let sidebar = SidebarController::mount_with_state(&mut window, 768, true);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_unmount_releases_listener() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount(&mut window, 768);
        assert_eq!(window.listener_count(), 1);
        drop(sidebar);
        assert_eq!(window.listener_count(), 0);
        window.resize(1024);
    }

    #[test]
    fn test_placement() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount(&mut window, 768);
        assert_eq!(sidebar.placement(500), SidebarPlacement::Hidden);
        sidebar.toggle();
        assert_eq!(sidebar.placement(500), SidebarPlacement::SlideIn);
        assert_eq!(sidebar.placement(800), SidebarPlacement::Docked);
        assert!(!sidebar.overlay_visible(800));
    }

    #[test]
    fn test_overlay_click_closes() {
        let mut window = Window::new(500);
        let sidebar = SidebarController::mount(&mut window, 768);
        assert!(!sidebar.click_overlay(500));
        sidebar.toggle();
        assert!(sidebar.click_overlay(500));
        assert!(!sidebar.is_open());
    }
}
