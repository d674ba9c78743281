use std::time::Instant;

use jobfeed_logging::{feed_debug, feed_info};

use crate::{AppState, Effect, Msg, PageOutcome, ScrollMetrics};

/// Pure update function: applies a message to state and returns any effects.
///
/// The filtered set is re-derived after every message whose handling changed
/// either the applied criteria or the accumulated listings.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated { at } => {
            if state.trigger.is_attached() {
                Vec::new()
            } else {
                feed_info!("listing view activated");
                state.trigger.attach();
                state.mark_dirty();
                match state.accumulator.unrequested_offset() {
                    Some(offset) => offer_offset(&mut state, offset, at),
                    None => Vec::new(),
                }
            }
        }
        Msg::Deactivated => {
            if state.trigger.is_attached() {
                feed_info!("listing view deactivated");
                state.trigger.detach();
                state.criteria_input.cancel();
                state.offsets.cancel();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Scrolled { metrics, at } => on_scroll(&mut state, &metrics, at),
        Msg::CriteriaEdited { criteria, at } => {
            state.criteria_input.push(criteria, at);
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick { at } => {
            if let Some(criteria) = state.criteria_input.poll(at) {
                feed_debug!("criteria settled: {:?}", criteria);
                state.apply_criteria(criteria);
            }
            match state.offsets.poll(at) {
                Some(offset) => start_fetch(&mut state, offset),
                None => Vec::new(),
            }
        }
        Msg::PageLoaded { request, result } => {
            match state.accumulator.complete(request, result) {
                PageOutcome::Appended { .. } => state.set_last_error(None),
                PageOutcome::Failed(failure) => state.set_last_error(Some(failure)),
                PageOutcome::Ignored => {}
            }
            Vec::new()
        }
    };

    state.refresh_filtered();
    (state, effects)
}

fn on_scroll(state: &mut AppState, metrics: &ScrollMetrics, at: Instant) -> Vec<Effect> {
    let mut advanced = None;
    let accumulator = &mut state.accumulator;
    state
        .trigger
        .observe(metrics, || advanced = accumulator.advance_offset());

    match advanced {
        Some(offset) => {
            state.mark_dirty();
            offer_offset(state, offset, at)
        }
        None => Vec::new(),
    }
}

/// Feeds an offset through the throttler; fetches now if the window is open.
fn offer_offset(state: &mut AppState, offset: u32, at: Instant) -> Vec<Effect> {
    match state.offsets.push(offset, at) {
        Some(offset) => start_fetch(state, offset),
        None => {
            feed_debug!("offset {} deferred by throttle", offset);
            Vec::new()
        }
    }
}

fn start_fetch(state: &mut AppState, offset: u32) -> Vec<Effect> {
    match state.accumulator.request_page(offset) {
        Some(request) => {
            state.mark_dirty();
            vec![Effect::FetchPage(request)]
        }
        None => Vec::new(),
    }
}
