//! Display monitor enumeration.

use crate::geometry::Rect;
use windows::Win32::Foundation::{BOOL, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};

unsafe extern "system" fn collect_work_area(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let work_areas = &mut *(lparam.0 as *mut Vec<Rect>);

    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // Skip monitors we cannot query, keep enumerating the rest
    if GetMonitorInfoW(hmonitor, &mut info).as_bool() {
        work_areas.push(info.rcWork.into());
    } else {
        tracing::debug!(?hmonitor, "GetMonitorInfoW failed");
    }

    TRUE
}

/// Gets the work area (screen minus taskbars and docked bars) of every
/// attached monitor.
pub fn enumerate_work_areas() -> Vec<Rect> {
    let mut work_areas: Vec<Rect> = Vec::new();
    unsafe {
        let _ = EnumDisplayMonitors(
            None,
            None,
            Some(collect_work_area),
            LPARAM(&mut work_areas as *mut Vec<Rect> as isize),
        );
    }
    work_areas
}
