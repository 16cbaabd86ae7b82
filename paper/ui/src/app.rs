use paper_model::config::Configuration;
use paper_ui_common::{config::use_config, utils::time::TimestampValue};
use paper_ui_components::{
    datetime::{Datetime, DatetimeSize},
    language::DocumentLanguage,
};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use time::macros::{date, datetime};
use yew::prelude::*;

#[function_component(Application)]
pub fn app() -> Html {
    let config = use_memo((), |()| Rc::new(crate::config::load()));

    html!(
        <ContextProvider<Rc<Configuration>> context={(*config).clone()}>
            <DocumentLanguage />
            <Posts />
        </ContextProvider<Rc<Configuration>>>
    )
}

struct Post {
    title: &'static str,
    posted: TimestampValue,
}

fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Dynamic OG image generation",
            posted: "2022-12-28T04:59:04.866Z".into(),
        },
        Post {
            title: "Adding new posts",
            posted: date!(2022 - 09 - 23).into(),
        },
        Post {
            title: "Customizing the color scheme",
            posted: datetime!(2022-09-25 15:20:35 +02:00).into(),
        },
        Post {
            title: "Draft",
            posted: "soon".into(),
        },
    ]
}

#[function_component(Posts)]
fn posts_view() -> Html {
    let config = use_config();
    let posts = use_memo((), |()| demo_posts());

    let (latest, rest) = match posts.split_first() {
        Some((latest, rest)) => (Some(latest), rest),
        None => (None, &[][..]),
    };

    html!(
        <PageSection variant={PageSectionVariant::Light}>
            <Content>
                <Title>{ config.global.product_name() }</Title>
            </Content>
            <Stack gutter=true>
                if let Some(latest) = latest {
                    <StackItem>
                        <Title level={Level::H2}>{ latest.title }</Title>
                        <Datetime datetime={latest.posted.clone()} size={DatetimeSize::Large} />
                    </StackItem>
                }
                { for rest.iter().map(|post| html!(
                    <StackItem>
                        <Title level={Level::H3}>{ post.title }</Title>
                        <Datetime
                            datetime={post.posted.clone()}
                            class="my-2"
                            fallback={html!(<i>{"n/a"}</i>)}
                        />
                    </StackItem>
                )) }
            </Stack>
        </PageSection>
    )
}
