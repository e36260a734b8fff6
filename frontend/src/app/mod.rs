//! Root component: upload panel, document selector and the three tabs.
//!
//! On mount it fetches the client settings and the document list and opens
//! the change-feed subscription; `destroy` drops the subscription.

mod messages;
mod state;
mod update;
mod view;

pub use messages::{Msg, Tab};
pub use state::App;

use common::flows::load_documents;
use common::gateway::DocumentStoreGateway;
use common::model::settings::ClientSettings;
use gloo_console::error;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

const SETTINGS_PATH: &str = "/api/settings";

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut app = App::new();
        load_settings(ctx.link().clone());
        load_initial_documents(&app, ctx.link().clone());

        let link = ctx.link().clone();
        match app
            .store
            .subscribe(Box::new(move |documents| link.send_message(Msg::Snapshot(documents))))
        {
            Ok(subscription) => app.subscription = Some(subscription),
            Err(err) => error!(format!("could not subscribe to document changes: {}", err)),
        }
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.subscription.take();
    }
}

/// Falls back to the built-in defaults when the backend has no settings.
fn load_settings(link: Scope<App>) {
    spawn_local(async move {
        let settings = match Request::get(SETTINGS_PATH).send().await {
            Ok(resp) if resp.ok() => resp.json::<ClientSettings>().await.ok(),
            _ => None,
        };
        if settings.is_none() {
            error!("could not load client settings, using defaults");
        }
        link.send_message(Msg::SettingsLoaded(settings.unwrap_or_default()));
    });
}

fn load_initial_documents(app: &App, link: Scope<App>) {
    let store = app.store.clone();
    spawn_local(async move {
        match load_documents(&store).await {
            Ok(documents) => link.send_message(Msg::DocumentsLoaded(documents)),
            Err(err) => error!(format!("could not load documents: {}", err)),
        }
    });
}
