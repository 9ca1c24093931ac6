// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Multi-restart tabu search over same-machine swap neighbourhoods.

use crate::{
    construction::ScheduleBuilder,
    numeric::SolveNumeric,
    search::{
        err::SearchError,
        neighborhood::{apply_swap, generate_swap_pairs, SwapPair},
        random_operation_order, SearchOutcome,
    },
};
use flowshop_core::prelude::{SlidingStdDev, TimePoint};
use flowshop_model::prelude::{ProblemInstance, Schedule};
use num_traits::ToPrimitive;
use std::collections::VecDeque;

// Warm-up length and plateau threshold of the standard-deviation
// stopping rule.
const SD_WINDOW: usize = 300;
const SD_PLATEAU: f64 = 1.0;

// Hard per-restart iteration cap. The plateau rule alone does not bound a
// walk that keeps oscillating with an amplitude above the threshold.
const MAX_LOCAL_ITERATIONS: usize = 100_000;

/// Bounded FIFO of recently applied swap moves.
#[derive(Debug, Clone)]
pub struct TabuList<T> {
    entries: VecDeque<SwapPair<T>>,
    capacity: usize,
}

impl<T: Copy + Ord> TabuList<T> {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, pair: &SwapPair<T>) -> bool {
        self.entries.contains(pair)
    }

    /// Appends a move, evicting the oldest entry beyond capacity.
    #[inline]
    pub fn push(&mut self, pair: SwapPair<T>) {
        self.entries.push_back(pair);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}

/// Why a local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    /// The makespan history flattened below the plateau threshold.
    Plateau,
    /// The aspiration-filtered candidate set came up empty.
    NoAdmissibleMove,
    /// The ordering does not admit the configured neighbourhood size.
    NeighbourhoodTooSmall,
    /// The per-restart iteration cap was hit before the history flattened.
    IterationLimit,
}

struct Candidate<T> {
    pair: SwapPair<T>,
    schedule: Schedule<T>,
    makespan: TimePoint<T>,
}

/// Applies the tabu filter with aspiration and picks the best admissible
/// candidate; ties go to the earliest generated.
fn select_candidate<T: SolveNumeric>(
    candidates: Vec<Candidate<T>>,
    tabu: &TabuList<T>,
    best_makespan: TimePoint<T>,
) -> Option<Candidate<T>> {
    let mut chosen: Option<Candidate<T>> = None;
    for candidate in candidates {
        if tabu.contains(&candidate.pair) && candidate.makespan >= best_makespan {
            continue;
        }
        if chosen
            .as_ref()
            .is_none_or(|c| candidate.makespan < c.makespan)
        {
            chosen = Some(candidate);
        }
    }
    chosen
}

/// The tabu search driver.
///
/// Runs `algorithm_retries + 1` independent restarts. Each restart seeds a
/// schedule from a fresh random ordering and then walks the swap
/// neighbourhood, recording applied moves in a bounded tabu list; a tabu
/// move is only admissible when it would improve on the best schedule
/// found so far. A restart's local search ends once the recent makespan
/// history flattens (population standard deviation of the last
/// [`SD_WINDOW`] iterations at or below the threshold) or no admissible
/// move remains.
#[derive(Debug)]
pub struct TabuSearch<'p, T, R> {
    instance: &'p ProblemInstance<T>,
    rng: R,
    sd_window: usize,
    sd_threshold: f64,
    max_local_iterations: usize,
}

impl<'p, T, R> TabuSearch<'p, T, R>
where
    T: SolveNumeric,
    R: rand::Rng,
{
    #[inline]
    pub fn new(instance: &'p ProblemInstance<T>, rng: R) -> Self {
        Self {
            instance,
            rng,
            sd_window: SD_WINDOW,
            sd_threshold: SD_PLATEAU,
            max_local_iterations: MAX_LOCAL_ITERATIONS,
        }
    }

    /// Overrides the stopping-rule warm-up length (mainly for tests; the
    /// production window is [`SD_WINDOW`]).
    #[inline]
    pub fn with_sd_window(mut self, window: usize) -> Self {
        self.sd_window = window.max(1);
        self
    }

    #[inline]
    pub fn with_sd_threshold(mut self, threshold: f64) -> Self {
        self.sd_threshold = threshold;
        self
    }

    #[inline]
    pub fn with_max_local_iterations(mut self, cap: usize) -> Self {
        self.max_local_iterations = cap.max(1);
        self
    }

    #[tracing::instrument(level = "debug", name = "Tabu Search", skip_all)]
    pub fn run(&mut self) -> Result<SearchOutcome<T>, SearchError> {
        let mut best: Option<SearchOutcome<T>> = None;
        let restarts = self.instance.algorithm_retries() + 1;

        for restart in 0..restarts {
            let order = random_operation_order(self.instance, &mut self.rng);
            let seed = match ScheduleBuilder::new(self.instance).build_append_only(order.clone())
            {
                Ok(schedule) => schedule,
                Err(e) => {
                    // The rotating deque can livelock on orderings whose
                    // stragglers keep colliding with their siblings; the
                    // order-preserving policy always terminates.
                    tracing::warn!(
                        restart,
                        error = %e,
                        "append-only seeding stalled, replaying the order with the order-preserving policy"
                    );
                    ScheduleBuilder::new(self.instance).build_order_preserving(order)?
                }
            };
            let makespan = seed.makespan()?;
            tracing::debug!(restart, %makespan, "restart seeded");

            if best.as_ref().is_none_or(|b| makespan < b.makespan()) {
                best = Some(SearchOutcome::new(seed.clone(), makespan));
            }

            let stop = self.optimize_locally(seed, &mut best)?;
            tracing::debug!(restart, ?stop, "local search stopped");
        }

        best.ok_or(SearchError::NoRestartSucceeded)
    }

    fn optimize_locally(
        &mut self,
        mut current: Schedule<T>,
        best: &mut Option<SearchOutcome<T>>,
    ) -> Result<StopReason, SearchError> {
        let mut tabu: TabuList<T> = TabuList::new(self.instance.tabu_list_size());
        let mut history =
            SlidingStdDev::new(self.sd_window).expect("stopping-rule window capacity is positive");

        for _ in 0..self.max_local_iterations {
            let order = current.operation_order();
            let pairs = match generate_swap_pairs(
                &order,
                self.instance.neighbour_search_count(),
                &mut self.rng,
            ) {
                Ok(pairs) => pairs,
                Err(e) => {
                    tracing::debug!(error = %e, "neighbourhood exhausted");
                    return Ok(StopReason::NeighbourhoodTooSmall);
                }
            };

            let mut candidates = Vec::with_capacity(pairs.len());
            for pair in pairs {
                let schedule = ScheduleBuilder::new(self.instance)
                    .build_order_preserving(apply_swap(&order, &pair))?;
                let makespan = schedule.makespan()?;
                candidates.push(Candidate {
                    pair,
                    schedule,
                    makespan,
                });
            }

            let best_makespan = best
                .as_ref()
                .map(|b| b.makespan())
                .ok_or(SearchError::NoRestartSucceeded)?;
            let Some(candidate) = select_candidate(candidates, &tabu, best_makespan) else {
                return Ok(StopReason::NoAdmissibleMove);
            };

            tabu.push(candidate.pair);
            if candidate.makespan < best_makespan {
                tracing::debug!(makespan = %candidate.makespan, "incumbent improved");
                *best = Some(SearchOutcome::new(
                    candidate.schedule.clone(),
                    candidate.makespan,
                ));
            }

            history.push(
                candidate
                    .makespan
                    .value()
                    .to_f64()
                    .unwrap_or(f64::MAX),
            );
            current = candidate.schedule;

            if history
                .population_std_dev()
                .is_some_and(|sd| sd <= self.sd_threshold)
            {
                return Ok(StopReason::Plateau);
            }
        }
        Ok(StopReason::IterationLimit)
    }
}
