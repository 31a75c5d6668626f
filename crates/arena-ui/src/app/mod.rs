//! Yew app shell: store wiring, poller lifecycle, dialog host.

use crate::app::api::ApiCtx;
use crate::components::bot_overview::BotOverviewCard;
use crate::components::leaderboard::LeaderboardCard;
use crate::components::modals::DialogHost;
use crate::components::navbar::AppNavbar;
use crate::core::store::AppStore;
use crate::features::arena::actions;
use crate::features::arena::poller::StatusPoller;
use crate::features::arena::state::{bot_name, selected_bot};
use crate::features::dialogs::state::DialogState;
use crate::services::error::ApiError;
use arena_api_models::{
    BotId, ChartRequest, CreateBotRequest, CreateLeaderboardRequest, LeaderboardId,
    PatchLeaderboardRequest,
};
use preferences::{
    POLL_INTERVAL_MS, api_base_url, apply_theme, load_auto_refresh, load_theme,
    persist_auto_refresh, persist_theme,
};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;

fn open_dialog(dispatch: &Dispatch<AppStore>, dialog: DialogState) {
    dispatch.reduce_mut(|store| store.dialog.open(dialog));
}

fn close_dialog(dispatch: &Dispatch<AppStore>) {
    dispatch.reduce_mut(|store| store.dialog.close());
}

fn surface_error(dispatch: &Dispatch<AppStore>, err: &ApiError) {
    open_dialog(
        dispatch,
        DialogState::Error {
            message: err.to_string(),
        },
    );
}

#[function_component(ArenaApp)]
fn arena_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let auto_refresh = use_state(load_auto_refresh);
    let theme = use_state(load_theme);
    let poller = use_mut_ref(|| None as Option<StatusPoller>);

    let bots = use_selector(|store: &AppStore| store.arena.bots.clone());
    let leaderboards = use_selector(|store: &AppStore| store.arena.leaderboards.clone());
    let selected_bot_id = use_selector(|store: &AppStore| store.arena.selected_bot_id);
    let connectivity = use_selector(|store: &AppStore| store.arena.connectivity);
    let matchmaking_enabled = use_selector(|store: &AppStore| store.arena.matchmaking_enabled);
    let dialog = use_selector(|store: &AppStore| store.dialog.clone());
    let selected = use_selector(|store: &AppStore| selected_bot(&store.arena).cloned());

    {
        let theme_value = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme_value);
                persist_theme(theme_value);
                || ()
            },
            theme_value,
        );
    }

    // The poller lives and dies with the auto-refresh toggle; cancellation
    // also discards any snapshot still in flight.
    {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        let poller = poller.clone();
        let enabled = *auto_refresh;
        use_effect_with_deps(
            move |_| {
                if enabled {
                    *poller.borrow_mut() = Some(StatusPoller::start(
                        api_ctx.client.clone(),
                        dispatch,
                        POLL_INTERVAL_MS,
                    ));
                } else {
                    // Still load once so the page is not empty on boot.
                    actions::refresh_status(api_ctx.client.clone(), dispatch);
                }
                move || {
                    poller.borrow_mut().take();
                }
            },
            enabled,
        );
    }

    let on_toggle_auto_refresh = {
        let auto_refresh = auto_refresh.clone();
        Callback::from(move |()| {
            let next = !*auto_refresh;
            persist_auto_refresh(next);
            auto_refresh.set(next);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let on_toggle_matchmaking = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        let enabled = *matchmaking_enabled;
        Callback::from(move |()| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let target = !enabled;
            spawn_local(async move {
                if let Err(err) = actions::set_matchmaking(&client, &dispatch, target).await {
                    surface_error(&dispatch, &err);
                }
            });
        })
    };

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: BotId| actions::select_bot(&dispatch, id))
    };

    let on_open_submit_bot = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| open_dialog(&dispatch, DialogState::SubmitBot))
    };

    let on_open_create_leaderboard = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| open_dialog(&dispatch, DialogState::CreateLeaderboard))
    };

    let on_close_dialog = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| close_dialog(&dispatch))
    };

    let on_submit_bot = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |payload: CreateBotRequest| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match actions::create_bot(&client, &dispatch, payload).await {
                    Ok(()) => close_dialog(&dispatch),
                    Err(err) => surface_error(&dispatch, &err),
                }
            });
        })
    };

    let on_rename_bot = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |(id, name): (BotId, String)| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match actions::rename_bot(&client, &dispatch, id, name).await {
                    Ok(()) => close_dialog(&dispatch),
                    Err(err) => surface_error(&dispatch, &err),
                }
            });
        })
    };

    let on_delete_bot = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: BotId| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            close_dialog(&dispatch);
            spawn_local(async move {
                if let Err(err) = actions::delete_bot(&client, &dispatch, id).await {
                    surface_error(&dispatch, &err);
                }
            });
        })
    };

    let on_create_leaderboard = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |payload: CreateLeaderboardRequest| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match actions::create_leaderboard(&client, &dispatch, payload).await {
                    Ok(()) => close_dialog(&dispatch),
                    Err(err) => surface_error(&dispatch, &err),
                }
            });
        })
    };

    let on_patch_leaderboard = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(
            move |(id, payload): (LeaderboardId, PatchLeaderboardRequest)| {
                let client = api_ctx.client.clone();
                let dispatch = dispatch.clone();
                spawn_local(async move {
                    match actions::patch_leaderboard(&client, &dispatch, id, payload).await {
                        Ok(()) => close_dialog(&dispatch),
                        Err(err) => surface_error(&dispatch, &err),
                    }
                });
            },
        )
    };

    let on_delete_leaderboard = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: LeaderboardId| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            close_dialog(&dispatch);
            spawn_local(async move {
                if let Err(err) = actions::delete_leaderboard(&client, &dispatch, id).await {
                    surface_error(&dispatch, &err);
                }
            });
        })
    };

    let on_view_source = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: BotId| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let name = bot_name(&dispatch.get().arena, id)
                    .unwrap_or("unknown")
                    .to_string();
                match actions::fetch_bot_source(&client, id).await {
                    Ok(source) => open_dialog(
                        &dispatch,
                        DialogState::ViewSource {
                            bot_name: name,
                            source_code: source.source_code,
                        },
                    ),
                    Err(err) => surface_error(&dispatch, &err),
                }
            });
        })
    };

    let on_chart = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |payload: ChartRequest| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match actions::fetch_chart(&client, payload.clone()).await {
                    Ok(overview) => open_dialog(
                        &dispatch,
                        DialogState::Chart {
                            filter: payload.filter,
                            attribute_name: payload.attribute_name,
                            overview: Some(overview),
                        },
                    ),
                    Err(err) => surface_error(&dispatch, &err),
                }
            });
        })
    };

    let selected_card = (*selected).clone().map_or_else(Html::default, |bot| {
        let id = bot.id;
        let name = bot.name.clone();
        let on_rename = {
            let dispatch = dispatch.clone();
            let name = name.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::RenameBot {
                        id,
                        current_name: name.clone(),
                    },
                );
            })
        };
        let on_delete = {
            let dispatch = dispatch.clone();
            let name = name.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::ConfirmDeleteBot {
                        id,
                        name: name.clone(),
                    },
                );
            })
        };
        let on_source = {
            let on_view_source = on_view_source.clone();
            Callback::from(move |()| on_view_source.emit(id))
        };
        html! {
            <BotOverviewCard
                bot={bot}
                on_rename={on_rename}
                on_delete={on_delete}
                on_view_source={on_source}
            />
        }
    });

    let boards = leaderboards.iter().map(|board| {
        let board = board.clone();
        let board_id = board.id;
        let on_edit = {
            let dispatch = dispatch.clone();
            let name = board.name.clone();
            let filter = board.filter.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::PatchLeaderboard {
                        id: board_id,
                        current_name: name.clone(),
                        current_filter: filter.clone(),
                    },
                );
            })
        };
        let on_delete = {
            let dispatch = dispatch.clone();
            let name = board.name.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::ConfirmDeleteLeaderboard {
                        id: board_id,
                        name: name.clone(),
                    },
                );
            })
        };
        let on_seeds = {
            let dispatch = dispatch.clone();
            let name = board.name.clone();
            let seeds = board.example_seeds.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::ExampleSeeds {
                        leaderboard_name: name.clone(),
                        seeds: seeds.clone(),
                    },
                );
            })
        };
        let on_open_chart = {
            let dispatch = dispatch.clone();
            let filter = board.filter.clone();
            Callback::from(move |()| {
                open_dialog(
                    &dispatch,
                    DialogState::Chart {
                        filter: filter.clone(),
                        attribute_name: String::new(),
                        overview: None,
                    },
                );
            })
        };
        html! {
            <LeaderboardCard
                key={board_id.0}
                board={board}
                bots={(*bots).clone()}
                selected_bot_id={*selected_bot_id}
                on_select={on_select.clone()}
                on_edit={on_edit}
                on_delete={on_delete}
                on_seeds={on_seeds}
                on_chart={on_open_chart}
            />
        }
    });

    html! {
        <>
            <AppNavbar
                connectivity={*connectivity}
                matchmaking_enabled={*matchmaking_enabled}
                auto_refresh={*auto_refresh}
                theme={*theme}
                on_toggle_auto_refresh={on_toggle_auto_refresh}
                on_toggle_matchmaking={on_toggle_matchmaking}
                on_toggle_theme={on_toggle_theme}
                on_submit_bot={on_open_submit_bot}
            />
            <main class="container">
                { selected_card }
                { for boards }
                <div class="page-actions">
                    <button class="btn btn-outline" onclick={on_open_create_leaderboard}>
                        {"New leaderboard"}
                    </button>
                </div>
            </main>
            <DialogHost
                dialog={(*dialog).clone()}
                on_close={on_close_dialog}
                on_submit_bot={on_submit_bot}
                on_rename_bot={on_rename_bot}
                on_delete_bot={on_delete_bot}
                on_create_leaderboard={on_create_leaderboard}
                on_patch_leaderboard={on_patch_leaderboard}
                on_delete_leaderboard={on_delete_leaderboard}
                on_chart={on_chart}
            />
        </>
    }
}

/// Mount the application onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<ArenaApp>::new().render();
}
