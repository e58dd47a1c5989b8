use crate::components::demos::{Counter, CustomHooksDemo, EffectsDemo, ThemeDemo};
use crate::components::imports::*;
use crate::components::ErrorMessage;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_title: Callback<AttrValue>,
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    children: Children,
}

#[styled_component]
fn Section(props: &SectionProps) -> Html {
    let section = css!(
        "
            border: 1px solid currentColor;
            border-radius: 8px;
            margin-bottom: 2em;

            h2 {
                margin: 0;
                padding: 0.8em 1em;
                border-bottom: 1px solid currentColor;
            }

            & > div {
                padding: 1em;
            }
        "
    );

    html! {
        <section class={ section }>
            <h2>{ props.title.clone() }</h2>
            <div>{ for props.children.iter() }</div>
        </section>
    }
}

#[function_component]
pub fn HooksPage(props: &Props) -> Html {
    let conf = match use_conf() {
        Ok(conf) => conf,
        Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
    };

    html! {
        <div>
            <h1>{ "Hooks Examples" }</h1>

            <Section title="State">
                <Counter/>
            </Section>

            <Section title="Effects">
                <EffectsDemo conf={ conf.clone() } on_title={ props.on_title.clone() }/>
            </Section>

            <Section title="Context">
                <ThemeDemo/>
            </Section>

            <Section title="Custom hooks: persisted state and debounce">
                <CustomHooksDemo
                    name_key={ conf.storage_key("user-name") }
                    search_key={ conf.storage_key("search-term") }
                    debounce_ms={ conf.debounce_ms }
                />
            </Section>
        </div>
    }
}
