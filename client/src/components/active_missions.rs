//! List of in-progress missions with progress bars.

use leptos::prelude::*;
use shell::component::Component;

use crate::state::catalog::active_missions;
use crate::state::home::HomeState;

#[component]
pub fn ActiveMissions() -> impl IntoView {
    super::status_on_mount(Component::ActiveMissions);

    let home = expect_context::<RwSignal<HomeState>>();

    view! {
        <aside class="active-missions">
            <h2 class="active-missions__title">"Active Missions"</h2>
            <ul class="active-missions__list">
                {active_missions()
                    .map(|mission| {
                        let id = mission.id;
                        view! {
                            <li class="active-missions__row" on:click=move |_| home.update(|h| h.focus_mission(id))>
                                <span class="active-missions__name">{mission.codename}</span>
                                <span class="active-missions__bar">
                                    <span class="active-missions__fill" style:width=format!("{}%", mission.progress)></span>
                                </span>
                                <span class="active-missions__pct">{format!("{}%", mission.progress)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
