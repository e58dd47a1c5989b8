use crate::conf::Conf;
use crate::router::Route;
use crate::switch::switch;

use stylist::css;
use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::theme::prelude::{Theme, WithTheme};
    use crate::components::theme::toggle::ThemeToggle;
    use crate::components::{DefaultStyling, Sidebar};

    let conf = use_memo(|_| Conf::derive(), ());

    let layout = css!(
        "
            display: flex;
            min-height: 100vh;

            main {
                flex: 1;
                padding: 2em 4em;
                max-width: 960px;
            }
        "
    );

    html! {
        <ContextProvider<Conf> context={ (*conf).clone() }>
            <WithTheme remember=true storage_key={ conf.storage_key(Theme::STORAGE_KEY) }>
                <DefaultStyling>
                    <BrowserRouter>
                        <ThemeToggle/>
                        <div class={ layout }>
                            <Sidebar/>
                            <main>
                                <Switch<Route> render={switch} />
                            </main>
                        </div>
                    </BrowserRouter>
                </DefaultStyling>
            </WithTheme>
        </ContextProvider<Conf>>
    }
}
