use paper_ui_components::datetime::{Datetime, DatetimeProperties, DatetimeSize, POSTED_ON};
use paper_ui_common::utils::time::{invalid_date_placeholder, TimestampValue};
use time::macros::date;
use yew::prelude::*;
use yew::ServerRenderer;

async fn render<F>(props: F) -> String
where
    F: FnOnce() -> DatetimeProperties + Send + 'static,
{
    ServerRenderer::<Datetime>::with_props(props).hydratable(false).render().await
}

fn props(datetime: TimestampValue) -> DatetimeProperties {
    DatetimeProperties {
        datetime,
        size: DatetimeSize::default(),
        class: AttrValue::default(),
        fallback: None,
    }
}

#[tokio::test]
async fn renders_label_and_date() {
    let html = render(|| props(date!(2023 - 01 - 05).into())).await;

    assert!(html.contains(&format!(r#"<span class="sr-only">{POSTED_ON}</span>"#)), "{html}");
    assert!(html.contains(">2023-01-05</span>"), "{html}");
    assert!(html.starts_with(r#"<div class="flex items-center opacity-80">"#), "{html}");
}

#[tokio::test]
async fn small_by_default() {
    let html = render(|| props("2023-12-31".into())).await;

    assert!(html.contains(r#"class="text-sm rounded-full border px-4 py-1""#), "{html}");
    assert!(html.contains(">2023-12-31</span>"), "{html}");
}

#[tokio::test]
async fn large() {
    let html = render(|| DatetimeProperties {
        size: DatetimeSize::Large,
        ..props("2023-12-31".into())
    })
    .await;

    assert!(html.contains(r#"class="text-base rounded-full border px-4 py-1""#), "{html}");
    assert!(!html.contains("text-sm"), "{html}");
}

#[tokio::test]
async fn additional_class() {
    let html = render(|| DatetimeProperties {
        class: "my-2 sm:my-0".into(),
        ..props("2023-12-31".into())
    })
    .await;

    assert!(
        html.starts_with(r#"<div class="flex items-center opacity-80 my-2 sm:my-0">"#),
        "{html}"
    );
}

#[tokio::test]
async fn invalid_renders_placeholder() {
    let html = render(|| props("not-a-date".into())).await;

    assert!(html.contains(">Invalid Date-Invalid Date-Invalid Date</span>"), "{html}");
    assert!(html.contains(&format!(">{}</span>", invalid_date_placeholder())), "{html}");
}

#[tokio::test]
async fn partial_iso_dates() {
    let html = render(|| props("2023-12".into())).await;
    assert!(html.contains(">2023-12-01</span>"), "{html}");

    let html = render(|| props("2023-12-31T10:00+02:00".into())).await;
    assert!(html.contains(">2023-12-31</span>"), "{html}");
}

#[tokio::test]
async fn invalid_renders_fallback() {
    let html = render(|| DatetimeProperties {
        fallback: Some(html!(<i>{"unknown"}</i>)),
        ..props("not-a-date".into())
    })
    .await;

    assert!(html.contains("<i>unknown</i>"), "{html}");
    assert!(!html.contains("Invalid Date"), "{html}");
}

#[tokio::test]
async fn fallback_unused_for_valid_dates() {
    let html = render(|| DatetimeProperties {
        fallback: Some(html!(<i>{"unknown"}</i>)),
        ..props("2022-09-25T15:20:35Z".into())
    })
    .await;

    assert!(html.contains(">2022-09-25</span>"), "{html}");
    assert!(!html.contains("unknown"), "{html}");
}
