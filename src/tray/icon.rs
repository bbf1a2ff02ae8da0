//! Icon creation for the system tray.

use tray_icon::Icon;

const ICON_SIZE: u32 = 32;

/// Draws the tray icon: an orange window frame with a title bar.
pub fn create_default_icon() -> Result<Icon, Box<dyn std::error::Error>> {
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            rgba.extend_from_slice(&icon_pixel(x, y));
        }
    }

    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| e.into())
}

fn icon_pixel(x: u32, y: u32) -> [u8; 4] {
    let (min, max) = (3, ICON_SIZE - 4);
    if x < min || x > max || y < min + 2 || y > max - 2 {
        return [0, 0, 0, 0];
    }

    let border = x == min || x == max || y == min + 2 || y == max - 2;
    let title_bar = y <= min + 7;
    if border || title_bar {
        [240, 130, 30, 255]
    } else {
        [250, 245, 235, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_corners_transparent() {
        assert_eq!(icon_pixel(0, 0)[3], 0);
        assert_eq!(icon_pixel(ICON_SIZE - 1, ICON_SIZE - 1)[3], 0);
    }

    #[test]
    fn test_icon_body_opaque() {
        assert_eq!(icon_pixel(16, 16), [250, 245, 235, 255]);
        assert_eq!(icon_pixel(16, 6), [240, 130, 30, 255]);
    }
}
