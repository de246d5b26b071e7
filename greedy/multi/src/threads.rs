// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the code run by the worker threads.

use std::cmp::min;
use std::sync::Arc;
use std::thread;

use crossbeam::channel::{bounded, Receiver, Sender};

use cover::CoverageMap;
use greedy_single::Search;

/// The channel between the main thread and the workers is bounded. This constant determines the size of the channel.
pub const CHANNEL_BOUNDS: usize = 32;

pub(crate) enum Work {
    Scan { map: Arc<CoverageMap>, target: usize },
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Response {
    ChunkBest { score: usize, candidate: usize },
}

/// Split the work concerning `total_size` items over `thread_count` threads. Returns the part for which `thread_id` is responsible.
#[inline]
pub fn split(thread_count: usize, thread_id: usize, total_size: usize) -> (usize, usize) {
    let mut batch_size = total_size / thread_count;
    if total_size % thread_count != 0 {
        batch_size += 1;
    }

    let start = thread_id * batch_size;
    let end = if thread_id < thread_count - 1 {
        min((thread_id + 1) * batch_size, total_size)
    } else {
        total_size
    };

    (start, end)
}

fn thread_main(thread_id: usize, thread_count: usize, search: Arc<Search>, sender: Sender<Response>, receiver: Receiver<Work>) {
    let (start, end) = split(thread_count, thread_id, search.candidates.len());

    loop {
        match receiver.recv() {
            Ok(Work::Scan { map, target }) => {
                let mut best_score = 0;
                let mut best_candidate = start;
                for candidate in start..end {
                    let score = map.score_row(&search.pair_list, search.candidates[candidate].as_slice());
                    if best_score < score {
                        best_score = score;
                        best_candidate = candidate;
                        if score == target {
                            break;
                        }
                    }
                }
                sender.send(Response::ChunkBest { score: best_score, candidate: best_candidate }).unwrap();
            }
            Err(_) => {
                return;
            }
        }
    }
}

pub(crate) fn init_pool(search: &Arc<Search>, thread_count: usize) -> (Vec<Sender<Work>>, Vec<Receiver<Response>>) {
    let mut senders = Vec::with_capacity(thread_count);
    let mut receivers = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let (sender, local_receiver) = bounded(CHANNEL_BOUNDS);
        senders.push(sender);
        let (local_sender, receiver) = bounded(CHANNEL_BOUNDS);
        receivers.push(receiver);
        let local_search = search.clone();

        thread::spawn(move || {
            thread_main(thread_id, thread_count, local_search, local_sender, local_receiver);
        });
    }

    (senders, receivers)
}
