//! A tiny job queue: finished jobs are removed in O(1) from the middle of the
//! list, the order in which jobs are processed doesn't matter.

use unstable_vec::UnstableVec;

#[derive(Debug)]
struct Job {
    id: u32,
    remaining: u32,
}

fn main() {
    let mut jobs: UnstableVec<_> = (0..8)
        .map(|id| Job { id, remaining: id % 3 + 1 })
        .collect();

    let mut round = 0;
    while !jobs.is_empty() {
        round += 1;

        // Work on every job, then drop the ones that are done.
        let done: Vec<_> = jobs
            .swap_extract_if(|job| {
                job.remaining -= 1;
                job.remaining == 0
            })
            .map(|job| job.id)
            .collect();

        println!("round {}: finished {:?}, still running: {:?}", round, done, jobs);
    }

    // Used as a free list: any slot will do.
    let mut free_slots = UnstableVec::from(&[3, 9, 4][..]);
    while let Some(slot) = free_slots.pop_any() {
        println!("reusing slot {}", slot);
    }
}
