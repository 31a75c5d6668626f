//! Selected-bot overview card: counters, build badges, bot actions.

use crate::features::arena::logic::{BuildBadge, build_badge};
use arena_api_models::BotOverview;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BotOverviewCardProps {
    pub bot: BotOverview,
    pub on_rename: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_view_source: Callback<()>,
}

#[function_component(BotOverviewCard)]
pub(crate) fn bot_overview_card(props: &BotOverviewCardProps) -> Html {
    let on_rename = {
        let cb = props.on_rename.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_delete = {
        let cb = props.on_delete.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_view_source = {
        let cb = props.on_view_source.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="card bot-overview">
            <header class="card-header">
                <h2>{props.bot.name.clone()}</h2>
                <div class="card-actions">
                    <button class="btn btn-ghost" onclick={on_view_source}>{"Source"}</button>
                    <button class="btn btn-ghost" onclick={on_rename}>{"Rename"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </header>
            <dl class="bot-facts">
                <dt>{"Language"}</dt>
                <dd>{props.bot.language.clone()}</dd>
                <dt>{"Submitted"}</dt>
                <dd>{props.bot.created_at.clone()}</dd>
                <dt>{"Matches"}</dt>
                <dd>{format!("{}", props.bot.matches_played)}</dd>
                <dt>{"Errors"}</dt>
                <dd>{format!("{}", props.bot.matches_with_error)}</dd>
            </dl>
            <div class="build-badges">
                { for props.bot.builds.iter().map(|build| {
                    let (class, label) = match build_badge(build) {
                        BuildBadge::Pending => ("badge badge-pending", "pending"),
                        BuildBadge::Running => ("badge badge-running", "running"),
                        BuildBadge::Success => ("badge badge-success", "success"),
                        BuildBadge::Error => ("badge badge-error", "error"),
                    };
                    let title = build.stderr.clone().unwrap_or_default();
                    html! {
                        <span class={class} title={title}>
                            {format!("{}: {label}", build.worker_name)}
                        </span>
                    }
                }) }
            </div>
        </section>
    }
}
