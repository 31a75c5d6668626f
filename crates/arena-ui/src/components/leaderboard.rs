//! Leaderboard card: ranking table with ratings and head-to-head winrates.

use crate::features::arena::logic::{
    WinrateTone, rating_score, winrate_against, winrate_percent, winrate_tone,
};
use arena_api_models::{BotId, BotOverview, LeaderboardOverview, LeaderboardState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LeaderboardCardProps {
    pub board: LeaderboardOverview,
    pub bots: Vec<BotOverview>,
    pub selected_bot_id: Option<BotId>,
    pub on_select: Callback<BotId>,
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_seeds: Callback<()>,
    pub on_chart: Callback<()>,
}

#[function_component(LeaderboardCard)]
pub(crate) fn leaderboard_card(props: &LeaderboardCardProps) -> Html {
    let title = if props.board.id.is_global() {
        "Global Leaderboard".to_string()
    } else {
        props.board.name.clone()
    };
    let wrap = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="card leaderboard">
            <header class="card-header">
                <h2>{title}</h2>
                <span class="leaderboard-total">
                    {format!("{} matches", props.board.total_matches)}
                </span>
                <div class="card-actions">
                    <button class="btn btn-ghost" onclick={wrap(&props.on_seeds)}>{"Seeds"}</button>
                    <button class="btn btn-ghost" onclick={wrap(&props.on_chart)}>{"Chart"}</button>
                    if !props.board.id.is_global() {
                        <>
                            <button class="btn btn-ghost" onclick={wrap(&props.on_edit)}>{"Edit"}</button>
                            <button class="btn btn-danger" onclick={wrap(&props.on_delete)}>{"Delete"}</button>
                        </>
                    }
                </div>
            </header>
            { body(props) }
        </section>
    }
}

fn body(props: &LeaderboardCardProps) -> Html {
    match props.board.status {
        LeaderboardState::Computing => html! {
            <div class="leaderboard-computing">
                <span class="spinner"></span>
                {"Recomputing…"}
            </div>
        },
        LeaderboardState::Error => html! {
            <div class="leaderboard-error">
                {props.board.error.clone().unwrap_or_else(|| "recompute failed".to_string())}
            </div>
        },
        LeaderboardState::Live => table(props),
    }
}

fn table(props: &LeaderboardCardProps) -> Html {
    html! {
        <table class="leaderboard-table">
            <thead>
                <tr>
                    <th>{"Rank"}</th>
                    <th>{"Name"}</th>
                    <th>{"Rating"}</th>
                    <th>{"Winrate"}</th>
                    <th>{"Wins / Loses / Draws"}</th>
                    <th>{"Total"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.board.items.iter().filter_map(|item| {
                    // A row whose bot vanished from the roster renders nothing.
                    let bot = props.bots.iter().find(|bot| bot.id == item.id)?;
                    let stats = props
                        .selected_bot_id
                        .and_then(|selected| winrate_against(&props.board, selected, item.id));
                    let selected = props.selected_bot_id == Some(item.id);
                    let on_select = {
                        let cb = props.on_select.clone();
                        let id = item.id;
                        Callback::from(move |_| cb.emit(id))
                    };
                    let score = rating_score(item.rating_mu, item.rating_sigma);
                    let rating_title = format!(
                        "mu: {:.2} sigma: {:.2}",
                        item.rating_mu, item.rating_sigma
                    );
                    let winrate = stats
                        .and_then(|s| winrate_percent(s.wins, s.loses, s.draws))
                        .map(|pct| (pct, winrate_tone(pct)));
                    Some(html! {
                        <tr class={if selected { "highlighted-row" } else { "" }}>
                            <td>{format!("{}", item.rank + 1)}</td>
                            <td>
                                <a href="#" onclick={on_select}>{bot.name.clone()}</a>
                            </td>
                            <td title={rating_title}>{format!("{score}")}</td>
                            { match winrate {
                                Some((pct, tone)) => {
                                    let class = match tone {
                                        WinrateTone::Favorable => "winrate winrate-favorable",
                                        WinrateTone::Even => "winrate winrate-even",
                                        WinrateTone::Unfavorable => "winrate winrate-unfavorable",
                                    };
                                    html! { <td class={class}>{format!("{pct}%")}</td> }
                                }
                                None => html! { <td></td> },
                            } }
                            { match stats {
                                Some(s) => html! {
                                    <>
                                        <td>{format!("{} / {} / {}", s.wins, s.loses, s.draws)}</td>
                                        <td>{format!("{}", s.wins + s.loses + s.draws)}</td>
                                    </>
                                },
                                None => html! { <><td></td><td></td></> },
                            } }
                        </tr>
                    })
                }) }
            </tbody>
        </table>
    }
}
