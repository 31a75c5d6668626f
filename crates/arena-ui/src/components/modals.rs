//! Modal dialogs, one component per dialog kind, hosted from the store's
//! dialog state.

use crate::features::dialogs::state::DialogState;
use arena_api_models::{
    BotId, ChartOverview, ChartRequest, CreateBotRequest, CreateLeaderboardRequest, LeaderboardId,
    PatchLeaderboardRequest,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DialogHostProps {
    pub dialog: DialogState,
    pub on_close: Callback<()>,
    pub on_submit_bot: Callback<CreateBotRequest>,
    pub on_rename_bot: Callback<(BotId, String)>,
    pub on_delete_bot: Callback<BotId>,
    pub on_create_leaderboard: Callback<CreateLeaderboardRequest>,
    pub on_patch_leaderboard: Callback<(LeaderboardId, PatchLeaderboardRequest)>,
    pub on_delete_leaderboard: Callback<LeaderboardId>,
    pub on_chart: Callback<ChartRequest>,
}

#[function_component(DialogHost)]
pub(crate) fn dialog_host(props: &DialogHostProps) -> Html {
    let close = props.on_close.clone();
    match &props.dialog {
        DialogState::Closed => Html::default(),
        DialogState::SubmitBot => html! {
            <SubmitBotDialog on_submit={props.on_submit_bot.clone()} on_close={close} />
        },
        DialogState::RenameBot { id, current_name } => html! {
            <RenameBotDialog
                id={*id}
                current_name={current_name.clone()}
                on_submit={props.on_rename_bot.clone()}
                on_close={close}
            />
        },
        DialogState::ConfirmDeleteBot { id, name } => {
            let on_confirm = {
                let cb = props.on_delete_bot.clone();
                let id = *id;
                Callback::from(move |()| cb.emit(id))
            };
            html! {
                <ConfirmDialog
                    prompt={format!("Are you sure you want to delete bot '{name}'?")}
                    on_confirm={on_confirm}
                    on_close={close}
                />
            }
        }
        DialogState::CreateLeaderboard => html! {
            <CreateLeaderboardDialog on_submit={props.on_create_leaderboard.clone()} on_close={close} />
        },
        DialogState::PatchLeaderboard {
            id,
            current_name,
            current_filter,
        } => html! {
            <PatchLeaderboardDialog
                id={*id}
                current_name={current_name.clone()}
                current_filter={current_filter.clone()}
                on_submit={props.on_patch_leaderboard.clone()}
                on_close={close}
            />
        },
        DialogState::ConfirmDeleteLeaderboard { id, name } => {
            let on_confirm = {
                let cb = props.on_delete_leaderboard.clone();
                let id = *id;
                Callback::from(move |()| cb.emit(id))
            };
            html! {
                <ConfirmDialog
                    prompt={format!("Are you sure you want to delete leaderboard '{name}'?")}
                    on_confirm={on_confirm}
                    on_close={close}
                />
            }
        }
        DialogState::ViewSource {
            bot_name,
            source_code,
        } => html! {
            <ModalShell title={format!("Source of '{bot_name}'")} on_close={close}>
                <pre class="source-view">{source_code.clone()}</pre>
            </ModalShell>
        },
        DialogState::ExampleSeeds {
            leaderboard_name,
            seeds,
        } => html! {
            <ModalShell title={format!("Example seeds for '{leaderboard_name}'")} on_close={close}>
                <ul class="seed-list">
                    { for seeds.iter().map(|seed| html! { <li>{format!("{seed}")}</li> }) }
                </ul>
            </ModalShell>
        },
        DialogState::Chart {
            filter,
            attribute_name,
            overview,
        } => html! {
            <ChartDialog
                filter={filter.clone()}
                attribute_name={attribute_name.clone()}
                overview={overview.clone()}
                on_submit={props.on_chart.clone()}
                on_close={close}
            />
        },
        DialogState::Error { message } => html! {
            <ModalShell title={"Something went wrong".to_string()} on_close={close}>
                <p class="error-message">{message.clone()}</p>
            </ModalShell>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ModalShellProps {
    title: String,
    on_close: Callback<()>,
    children: Children,
}

#[function_component(ModalShell)]
fn modal_shell(props: &ModalShellProps) -> Html {
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <dialog open={true} class="modal">
            <div class="modal-box">
                <header class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="btn btn-ghost btn-close" onclick={on_close}>{"×"}</button>
                </header>
                { for props.children.iter() }
            </div>
        </dialog>
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct ConfirmDialogProps {
    prompt: String,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
}

#[function_component(ConfirmDialog)]
fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <ModalShell title={"Please confirm".to_string()} on_close={props.on_close.clone()}>
            <p>{props.prompt.clone()}</p>
            <footer class="modal-footer">
                <button class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                <button class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
            </footer>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
struct SubmitBotDialogProps {
    on_submit: Callback<CreateBotRequest>,
    on_close: Callback<()>,
}

#[function_component(SubmitBotDialog)]
fn submit_bot_dialog(props: &SubmitBotDialogProps) -> Html {
    let name_ref = use_node_ref();
    let language_ref = use_node_ref();
    let source_ref = use_node_ref();
    let on_submit = {
        let cb = props.on_submit.clone();
        let name_ref = name_ref.clone();
        let language_ref = language_ref.clone();
        let source_ref = source_ref.clone();
        Callback::from(move |_| {
            cb.emit(CreateBotRequest {
                name: input_value(&name_ref),
                language: input_value(&language_ref),
                source_code: textarea_value(&source_ref),
            });
        })
    };
    html! {
        <ModalShell title={"Submit a new bot".to_string()} on_close={props.on_close.clone()}>
            <label class="form-field">
                {"Name"}
                <input ref={name_ref} type="text" maxlength="32" />
            </label>
            <label class="form-field">
                {"Language"}
                <input ref={language_ref} type="text" />
            </label>
            <label class="form-field">
                {"Source code"}
                <textarea ref={source_ref} rows="16"></textarea>
            </label>
            <footer class="modal-footer">
                <button class="btn btn-primary" onclick={on_submit}>{"Submit"}</button>
            </footer>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
struct RenameBotDialogProps {
    id: BotId,
    current_name: String,
    on_submit: Callback<(BotId, String)>,
    on_close: Callback<()>,
}

#[function_component(RenameBotDialog)]
fn rename_bot_dialog(props: &RenameBotDialogProps) -> Html {
    let name = use_state(|| props.current_name.clone());
    let oninput = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            name.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let id = props.id;
        let name = name.clone();
        Callback::from(move |_| cb.emit((id, (*name).clone())))
    };
    html! {
        <ModalShell title={"Rename bot".to_string()} on_close={props.on_close.clone()}>
            <label class="form-field">
                {"New name"}
                <input type="text" maxlength="32" value={(*name).clone()} {oninput} />
            </label>
            <footer class="modal-footer">
                <button class="btn btn-primary" onclick={on_submit}>{"Rename"}</button>
            </footer>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
struct CreateLeaderboardDialogProps {
    on_submit: Callback<CreateLeaderboardRequest>,
    on_close: Callback<()>,
}

#[function_component(CreateLeaderboardDialog)]
fn create_leaderboard_dialog(props: &CreateLeaderboardDialogProps) -> Html {
    let name_ref = use_node_ref();
    let filter_ref = use_node_ref();
    let on_submit = {
        let cb = props.on_submit.clone();
        let name_ref = name_ref.clone();
        let filter_ref = filter_ref.clone();
        Callback::from(move |_| {
            cb.emit(CreateLeaderboardRequest {
                name: input_value(&name_ref),
                filter: input_value(&filter_ref),
            });
        })
    };
    html! {
        <ModalShell title={"New leaderboard".to_string()} on_close={props.on_close.clone()}>
            <label class="form-field">
                {"Name"}
                <input ref={name_ref} type="text" />
            </label>
            <label class="form-field">
                {"Filter"}
                <input ref={filter_ref} type="text" placeholder="match.player_count == 2" />
            </label>
            <footer class="modal-footer">
                <button class="btn btn-primary" onclick={on_submit}>{"Create"}</button>
            </footer>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
struct PatchLeaderboardDialogProps {
    id: LeaderboardId,
    current_name: String,
    current_filter: String,
    on_submit: Callback<(LeaderboardId, PatchLeaderboardRequest)>,
    on_close: Callback<()>,
}

#[function_component(PatchLeaderboardDialog)]
fn patch_leaderboard_dialog(props: &PatchLeaderboardDialogProps) -> Html {
    let name = use_state(|| props.current_name.clone());
    let filter = use_state(|| props.current_filter.clone());
    let name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            name.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let filter_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            filter.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let id = props.id;
        let name = name.clone();
        let filter = filter.clone();
        Callback::from(move |_| {
            cb.emit((
                id,
                PatchLeaderboardRequest {
                    name: (*name).clone(),
                    filter: (*filter).clone(),
                },
            ));
        })
    };
    html! {
        <ModalShell title={"Edit leaderboard".to_string()} on_close={props.on_close.clone()}>
            <label class="form-field">
                {"Name"}
                <input type="text" value={(*name).clone()} oninput={name_input} />
            </label>
            <label class="form-field">
                {"Filter"}
                <input type="text" value={(*filter).clone()} oninput={filter_input} />
            </label>
            <footer class="modal-footer">
                <button class="btn btn-primary" onclick={on_submit}>{"Save"}</button>
            </footer>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
struct ChartDialogProps {
    filter: String,
    attribute_name: String,
    overview: Option<ChartOverview>,
    on_submit: Callback<ChartRequest>,
    on_close: Callback<()>,
}

#[function_component(ChartDialog)]
fn chart_dialog(props: &ChartDialogProps) -> Html {
    let filter = use_state(|| props.filter.clone());
    let attribute = use_state(|| props.attribute_name.clone());
    let filter_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            filter.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let attribute_input = {
        let attribute = attribute.clone();
        Callback::from(move |event: InputEvent| {
            attribute.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let filter = filter.clone();
        let attribute = attribute.clone();
        Callback::from(move |_| {
            cb.emit(ChartRequest {
                filter: (*filter).clone(),
                attribute_name: (*attribute).clone(),
            });
        })
    };
    html! {
        <ModalShell title={"Chart a match attribute".to_string()} on_close={props.on_close.clone()}>
            <label class="form-field">
                {"Filter"}
                <input type="text" value={(*filter).clone()} oninput={filter_input} />
            </label>
            <label class="form-field">
                {"Attribute"}
                <input type="text" value={(*attribute).clone()} oninput={attribute_input} />
            </label>
            <footer class="modal-footer">
                <button class="btn btn-primary" onclick={on_submit}>{"Load"}</button>
            </footer>
            { match &props.overview {
                Some(overview) => html! {
                    <div class="chart-summary">
                        <p>{format!("{} matches aggregated", overview.total_matches)}</p>
                        <ul>
                            { for overview.items.iter().map(|series| html! {
                                <li>{format!("bot {}: {} turns", series.bot_id, series.data.len())}</li>
                            }) }
                        </ul>
                    </div>
                },
                None => Html::default(),
            } }
        </ModalShell>
    }
}
