use paper_ui_common::utils::time::{formatted_date, or_placeholder, TimestampValue};
use yew::prelude::*;

/// Accessibility label announced before the date.
pub const POSTED_ON: &str = "Posted on:";

const CONTAINER_CLASS: &str = "flex items-center opacity-80";
const BADGE_CLASS: &str = "rounded-full border px-4 py-1";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum DatetimeSize {
    #[default]
    #[strum(serialize = "sm")]
    Small,
    #[strum(serialize = "lg")]
    Large,
}

impl DatetimeSize {
    pub const fn text_class(&self) -> &'static str {
        match self {
            Self::Small => "text-sm",
            Self::Large => "text-base",
        }
    }
}

/// Classes of the outer element, with `extra` appended as given.
pub fn container_class(extra: &str) -> String {
    match extra.is_empty() {
        true => CONTAINER_CLASS.to_string(),
        false => format!("{CONTAINER_CLASS} {extra}"),
    }
}

/// Classes of the badge element.
pub fn badge_class(size: DatetimeSize) -> String {
    format!("{} {BADGE_CLASS}", size.text_class())
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct DatetimeProperties {
    pub datetime: TimestampValue,

    #[prop_or_default]
    pub size: DatetimeSize,

    /// Additional classes for the outer element
    #[prop_or_default]
    pub class: AttrValue,

    /// Rendered instead of the placeholder when the date is invalid
    #[prop_or_default]
    pub fallback: Option<Html>,
}

/// Date badge of a post, as `YYYY-MM-DD` with a screen reader label.
#[function_component(Datetime)]
pub fn datetime(props: &DatetimeProperties) -> Html {
    html!(
        <div class={container_class(&props.class)}>
            <span class="sr-only">{ POSTED_ON }</span>
            <span class={badge_class(props.size)}>
                <FormattedDatetime datetime={props.datetime.clone()} fallback={props.fallback.clone()} />
            </span>
        </div>
    )
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct FormattedDatetimeProperties {
    pub datetime: TimestampValue,

    #[prop_or_default]
    pub fallback: Option<Html>,
}

#[function_component(FormattedDatetime)]
pub fn formatted_datetime(props: &FormattedDatetimeProperties) -> Html {
    let date = use_memo(props.datetime.clone(), formatted_date);

    match (&*date, &props.fallback) {
        (Err(err), Some(fallback)) => {
            log::debug!("Rendering fallback for invalid date: {err}");
            fallback.clone()
        }
        (date, _) => html!({ or_placeholder(date) }),
    }
}
