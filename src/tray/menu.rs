//! Context menu for the system tray.

use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};

/// Menu item IDs
pub const MENU_ID_PAUSE: &str = "pause";
pub const MENU_ID_EXIT: &str = "exit";

/// Creates the context menu: a pause toggle and an exit item.
pub fn create_tray_menu() -> Menu {
    let menu = Menu::new();

    let pause = CheckMenuItem::with_id(
        MenuId::new(MENU_ID_PAUSE),
        "Pause evasion",
        true,
        false,
        None,
    );
    let separator = PredefinedMenuItem::separator();
    let exit = MenuItem::with_id(MenuId::new(MENU_ID_EXIT), "Exit", true, None);

    let _ = menu.append(&pause);
    let _ = menu.append(&separator);
    let _ = menu.append(&exit);

    menu
}
