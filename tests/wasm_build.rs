//! WASM build test
//!
//! Exercises the DOM-coupled path in a real browser: construction, class
//! application, layout write-back, and dynamic card insertion/removal.

use masonry_wasm::MasonryGrid;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Container with `cards` unstyled child divs, attached to the page.
fn make_container(cards: usize) -> Element {
    let document = document();
    let container = document.create_element("div").unwrap();
    for _ in 0..cards {
        let card = document.create_element("div").unwrap();
        container.append_child(&card).unwrap();
    }
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Container with explicitly sized cards so the browser reports real
/// offset dimensions: each card is `card_width` wide and takes its height
/// from `heights_px`.
fn sized_container(heights_px: &[i32], card_width: i32, container_width: i32) -> Element {
    let document = document();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    container
        .style()
        .set_property("width", &format!("{}px", container_width))
        .unwrap();
    for height in heights_px {
        let card: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        card.style()
            .set_property("width", &format!("{}px", card_width))
            .unwrap();
        card.style()
            .set_property("height", &format!("{}px", height))
            .unwrap();
        container.append_child(&card).unwrap();
    }
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

fn style_of(element: &Element) -> web_sys::CssStyleDeclaration {
    element.clone().unchecked_into::<HtmlElement>().style()
}

fn parse_config(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

/// Resolve after `ms`, letting queued observer callbacks run first.
async fn tick(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_missing_container_is_rejected() {
    assert!(MasonryGrid::new(None, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_malformed_config_is_rejected() {
    let container = make_container(1);
    let config = parse_config(r#"{"animationDelay": "soon"}"#);
    assert!(MasonryGrid::new(Some(container), config).is_err());
}

#[wasm_bindgen_test]
fn test_default_construction_marks_cards_and_container() {
    let container = make_container(3);
    MasonryGrid::new(Some(container.clone()), JsValue::UNDEFINED).unwrap();

    // animation defaults on: the container carries the fade class
    assert!(container
        .class_list()
        .contains("masonry-grid-animation-fade"));

    // every child carries the structural class and the inner wrapper
    let children = container.children();
    assert_eq!(children.length(), 3);
    for i in 0..children.length() {
        let child = children.item(i).unwrap();
        assert!(child.class_list().contains("masonry-item"));
        let inner = child.children().item(0).unwrap();
        assert!(inner.class_list().contains("masonry-item-inner"));
    }

    // the initial layout pass wrote the container height
    let height = style_of(&container).get_property_value("height").unwrap();
    assert!(height.ends_with("px"));
}

#[wasm_bindgen_test]
fn test_animation_disabled_leaves_content_unwrapped() {
    let container = make_container(2);
    let config = parse_config(r#"{"animation": false}"#);
    MasonryGrid::new(Some(container.clone()), config).unwrap();

    assert!(!container
        .class_list()
        .contains("masonry-grid-animation-fade"));
    let first = container.children().item(0).unwrap();
    assert!(first.class_list().contains("masonry-item"));
    assert_eq!(first.children().length(), 0);
}

#[wasm_bindgen_test]
fn test_three_column_layout_is_written_back() {
    // 300px container, 100px cards: three columns, two rows
    let container = sized_container(&[100, 150, 120, 90, 200, 80], 100, 300);
    let config = parse_config(r#"{"animation": false}"#);
    MasonryGrid::new(Some(container.clone()), config).unwrap();

    let children = container.children();
    // first row stays in place
    for i in 0..3 {
        let child = children.item(i).unwrap();
        let transform = style_of(&child).get_property_value("transform").unwrap();
        assert!(transform.contains("0px"), "card {}: {}", i, transform);
    }
    // second row closes the gaps its columns left open
    for (i, expected) in [(3, "-50px"), (4, "-50px"), (5, "-30px")] {
        let child = children.item(i).unwrap();
        let transform = style_of(&child).get_property_value("transform").unwrap();
        assert_eq!(transform, format!("translateY({})", expected), "card {}", i);
    }
    let height = style_of(&container).get_property_value("height").unwrap();
    assert_eq!(height, "350px");
}

#[wasm_bindgen_test]
fn test_trigger_animation_swaps_container_classes() {
    let container = make_container(2);
    let grid = MasonryGrid::new(Some(container.clone()), JsValue::UNDEFINED).unwrap();

    grid.trigger_animation("slideIn");

    assert!(container
        .class_list()
        .contains("masonry-grid-animation-slidein"));
    assert!(!container
        .class_list()
        .contains("masonry-grid-animation-fade"));
}

#[wasm_bindgen_test]
async fn test_added_card_is_adopted() {
    let container = sized_container(&[100, 150, 120], 100, 300);
    let config = parse_config(r#"{"animation": false, "observeMutations": true}"#);
    MasonryGrid::new(Some(container.clone()), config).unwrap();

    let card: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    card.style().set_property("width", "100px").unwrap();
    card.style().set_property("height", "60px").unwrap();
    container.append_child(&card).unwrap();
    tick(50).await;

    // the grid wrapped the new element and re-ran layout over 4 cards:
    // columns are [100, 60], [150], [120]
    assert!(card.class_list().contains("masonry-item"));
    let height = style_of(&container).get_property_value("height").unwrap();
    assert_eq!(height, "160px");
}

#[wasm_bindgen_test]
async fn test_removed_card_shrinks_the_grid() {
    let container = sized_container(&[100, 150, 120], 100, 300);
    let config = parse_config(r#"{"animation": false, "observeMutations": true}"#);
    MasonryGrid::new(Some(container.clone()), config).unwrap();

    let second = container.children().item(1).unwrap();
    container.remove_child(&second).unwrap();
    tick(50).await;

    // two cards remain, one per column; the tallest is 120px
    let height = style_of(&container).get_property_value("height").unwrap();
    assert_eq!(height, "120px");
}

#[wasm_bindgen_test]
async fn test_card_resize_triggers_a_recompute() {
    let container = sized_container(&[100, 150, 120], 100, 300);
    let config = parse_config(r#"{"animation": false}"#);
    MasonryGrid::new(Some(container.clone()), config).unwrap();

    let first: HtmlElement = container.children().item(0).unwrap().unchecked_into();
    first.style().set_property("height", "400px").unwrap();
    tick(100).await;

    let height = style_of(&container).get_property_value("height").unwrap();
    assert_eq!(height, "400px");
}
