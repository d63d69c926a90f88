//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use matchboard::{
    BoardConfig, BrowserScheduler, ClickEvent, DateClock, DomPage, Interaction, MatchBoard,
    MatchEntry, MatchStatus, NavigatorClipboard, Page, Scheduler, TimerTask, WallClock,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

// ============================================================================
// Fixtures
// ============================================================================

/// Markup mounted into the body, removed again on drop.
struct Mounted(Element);

impl Drop for Mounted {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn mount(html: &str) -> Mounted {
    let document = document();
    let root = document.create_element("div").expect("create div");
    root.set_inner_html(html);
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append");
    Mounted(root)
}

fn entry_markup(id: &str, date: &str, status: &str) -> String {
    format!(
        r#"<div id="{id}"><div></div><div></div><div>{date}</div><div class="copy"><span class="clipboard">icon</span></div><div>{status}</div><div></div></div>"#
    )
}

fn listing() -> String {
    let mut html = String::from(
        r#"<div id="toggle_planned"></div><div id="toggle_in_progress"></div><div id="toggle_finished"></div><div id="match_list">"#,
    );
    html.push_str(&entry_markup("m1", "2024-05-01", "Planned"));
    html.push_str(&entry_markup("m2", "2024-05-03", "Finished"));
    html.push_str(&entry_markup("m3", "2024-05-02", "InProgress"));
    html.push_str(r#"</div><div id="no_matches" class="hidden"></div><div id="error">oops</div>"#);
    html
}

fn page() -> DomPage {
    DomPage::new(document(), |_| {})
}

fn ids(page: &DomPage, list: &Element) -> Vec<String> {
    page.children(list).iter().map(Element::id).collect()
}

// ============================================================================
// DomPage
// ============================================================================

#[wasm_bindgen_test]
fn test_entry_fields_from_dom() {
    let _mounted = mount(&listing());
    let page = page();
    let list = page.element_by_id("match_list").expect("list");
    let entries = MatchEntry::read_all(&page, &list);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].sort_key, "2024-05-03");
    assert_eq!(entries[1].status, Some(MatchStatus::Finished));
}

#[wasm_bindgen_test]
fn test_toggle_class_force() {
    let _mounted = mount(r#"<div id="styled" class="a"></div>"#);
    let page = page();
    let element = page.element_by_id("styled").expect("element");
    page.toggle_class(&element, "a", true);
    page.toggle_class(&element, "hover:bg-sky-400", true);
    assert!(page.has_class(&element, "a"));
    assert!(page.has_class(&element, "hover:bg-sky-400"));
    page.toggle_class(&element, "a", false);
    assert!(!page.has_class(&element, "a"));
}

#[wasm_bindgen_test]
fn test_find_by_class_is_scoped() {
    let _mounted = mount(&listing());
    let page = page();
    let entry = page.element_by_id("m2").expect("entry");
    let indicator = page.find_by_class(&entry, "clipboard").expect("indicator");
    assert_eq!(page.inner_html(&indicator), "icon");
    let list = page.element_by_id("no_matches").expect("placeholder");
    assert!(page.find_by_class(&list, "clipboard").is_none());
}

#[wasm_bindgen_test]
fn test_bound_toggle_receives_clicks() {
    let _mounted = mount(&listing());
    let clicked = Rc::new(Cell::new(None));
    let sink = Rc::clone(&clicked);
    let page = DomPage::new(document(), move |slot| sink.set(Some(slot)));
    let button = page.element_by_id("toggle_finished").expect("button");
    page.bind_toggle(&button, 2);

    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(clicked.get(), Some(2));
}

#[wasm_bindgen_test]
fn test_dropped_page_unbinds() {
    let _mounted = mount(&listing());
    let clicked = Rc::new(Cell::new(0));
    let sink = Rc::clone(&clicked);
    let page = DomPage::new(document(), move |_| sink.set(sink.get() + 1));
    let button = page.element_by_id("toggle_planned").expect("button");
    page.bind_toggle(&button, 0);
    drop(page);

    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(clicked.get(), 0);
}

#[wasm_bindgen_test]
fn test_detached_button_listener_released() {
    let page = page();
    {
        let _mounted = mount(&listing());
        let button = page.element_by_id("toggle_planned").expect("button");
        page.bind_toggle(&button, 0);
        assert_eq!(page.listener_count(), 1);
    }

    let _mounted = mount(&listing());
    let button = page.element_by_id("toggle_planned").expect("button");
    page.bind_toggle(&button, 0);
    assert_eq!(page.listener_count(), 1);
}

// ============================================================================
// Board over the DOM
// ============================================================================

fn board() -> MatchBoard<DomPage, BrowserScheduler, NavigatorClipboard, DateClock> {
    let window = web_sys::window().expect("window");
    MatchBoard::new(
        BoardConfig::default(),
        page(),
        BrowserScheduler::new(window, |_| {}),
        NavigatorClipboard,
        DateClock,
    )
}

#[wasm_bindgen_test]
fn test_board_sorts_real_list() {
    let _mounted = mount(&listing());
    let mut board = board();
    assert_eq!(board.matches_load().expect("load"), 3);
    assert_eq!(board.matches_update().expect("update"), 3);
    let list = board.page().element_by_id("match_list").expect("list");
    assert_eq!(ids(board.page(), &list), ["m2", "m3", "m1"]);
}

#[wasm_bindgen_test]
fn test_board_toggle_hides_and_shows_placeholder() {
    let _mounted = mount(&listing());
    let mut board = board();
    board.matches_load().expect("load");
    board.toggle(0).expect("toggle");
    board.toggle(1).expect("toggle");
    assert_eq!(board.toggle(2).expect("toggle"), 0);

    let page = board.page();
    let placeholder = page.element_by_id("no_matches").expect("placeholder");
    let list = page.element_by_id("match_list").expect("list");
    assert!(!page.has_class(&placeholder, "hidden"));
    assert!(page.has_class(&list, "hidden"));
    let button = page.element_by_id("toggle_finished").expect("button");
    assert!(page.has_class(&button, "bg-zinc-700"));
    assert!(!page.has_class(&button, "bg-sky-500"));
}

#[wasm_bindgen_test]
fn test_board_close_error() {
    let _mounted = mount(&listing());
    let board = board();
    board.close_error().expect("close");
    let region = board.page().element_by_id("error").expect("region");
    assert_eq!(region.inner_html(), "");
}

// ============================================================================
// Timers, clock and clicks
// ============================================================================

#[wasm_bindgen_test]
fn test_interval_released_on_clear() {
    let window = web_sys::window().expect("window");
    let scheduler = BrowserScheduler::new(window, |_| {});
    let handle = scheduler
        .set_interval(TimerTask::ClockTick, Duration::from_secs(1))
        .expect("interval");
    assert_eq!(scheduler.active_intervals(), 1);
    scheduler.clear(handle);
    assert_eq!(scheduler.active_intervals(), 0);
}

#[wasm_bindgen_test]
fn test_timeout_handle_issued() {
    let window = web_sys::window().expect("window");
    let scheduler = BrowserScheduler::new(window, |_| {});
    let handle = scheduler
        .set_timeout(TimerTask::ClipboardRevert, Duration::from_millis(10))
        .expect("timeout");
    assert!(handle.0 > 0);
    scheduler.clear(handle);
    assert_eq!(scheduler.active_intervals(), 0);
}

#[wasm_bindgen_test]
fn test_date_clock_is_epoch_millis() {
    // 2020-01-01T00:00:00Z
    assert!(DateClock.now_millis() > 1_577_836_800_000);
}

#[wasm_bindgen_test]
fn test_undispatched_click_has_no_target() {
    let click = ClickEvent(Event::new("click").expect("event"));
    assert!(click.current_target().is_none());
    click.stop_propagation();
}
