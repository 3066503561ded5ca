use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Where the page has to scroll so a section sits just below the header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

/// Smoothly scrolls to `#id` when it is on the current page. Returns
/// false when it isn't.
pub fn scroll_within_page(id: &str, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        header_offset,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Like [`scroll_within_page`], but sends the browser to the home page
/// anchor when the section lives elsewhere.
pub fn scroll_to_section(id: &str, header_offset: f64) {
    if scroll_within_page(id, header_offset) {
        return;
    }
    debug!("#{} not on this page, navigating home", id);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&format!("/#{}", id));
    }
}

/// Honours a `#section` fragment left by a cross-page navigation.
pub fn scroll_to_location_hash(header_offset: f64) {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let id = hash.trim_start_matches('#');
    if !id.is_empty() && !scroll_within_page(id, header_offset) {
        debug!("Ignoring unknown fragment #{}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_leaves_room_for_header() {
        assert_eq!(scroll_target(400.0, 1000.0, 80.0), 1320.0);
    }

    #[test]
    fn target_never_negative() {
        assert_eq!(scroll_target(20.0, 0.0, 80.0), 0.0);
        assert_eq!(scroll_target(-500.0, 100.0, 0.0), 0.0);
    }
}
