/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! End-to-end scenarios through the scheduler and session.

use sortviz::model::{Highlight, SortEvent};
use sortviz::scheduler::journal::{Journal, SharedJournal};
use sortviz::{Algorithm, RunConfig, Scheduler, Session, SessionConfig, Speed};
use std::time::Duration;

fn fast() -> Speed {
    Speed::new(Duration::from_millis(1))
}

#[test]
fn test_quicksort_reference_scenario() {
    let journal = SharedJournal::new();
    let mut scheduler = Scheduler::new(Vec::new());
    scheduler.add_listener(journal.clone().into_listener());

    let report = scheduler
        .start(RunConfig::new(Algorithm::QuickSort, fast(), vec![5, 3, 8, 1, 9, 2]))
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(report.values, vec![1, 2, 3, 5, 8, 9]);
    journal.with(|j| {
        assert!(j.is_complete());
        assert_eq!(j.len() as u64, report.frames);
    });
}

#[test]
fn test_bubble_sort_reference_scenario() {
    let journal = SharedJournal::new();
    let mut scheduler = Scheduler::new(vec![2, 1]);
    scheduler.add_listener(journal.clone().into_listener());

    let config = RunConfig::new(Algorithm::BubbleSort, fast(), scheduler.values());
    scheduler.start(config).unwrap().join().unwrap();

    let frames = journal.frames();
    let events: Vec<_> = frames.iter().map(|f| f.event.clone()).collect();
    assert_eq!(
        events,
        vec![
            SortEvent::compare(0, 1),
            SortEvent::swap(0, 1),
            SortEvent::sorted(2)
        ]
    );
    assert_eq!(frames[0].values, vec![2, 1]);
    assert_eq!(frames[1].values, vec![1, 2]);
    assert_eq!(frames[1].highlights(), vec![Highlight::Swap, Highlight::Swap]);
    assert_eq!(scheduler.values(), vec![1, 2]);
}

#[test]
fn test_slider_midpoint_scenario() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let speed = session.set_speed_slider(50).unwrap();
    assert_eq!(speed.delay(), Duration::from_millis(500));
    assert_eq!(session.speed().delay().as_secs_f64(), 0.5);
}

#[test]
fn test_session_runs_every_algorithm_on_same_array() {
    let mut session = Session::new(SessionConfig {
        size: 24,
        speed_secs: 0.001,
        seed: Some(99),
        ..Default::default()
    })
    .unwrap();
    let original = session.values();

    for algorithm in Algorithm::ALL {
        assert!(session.scheduler().replace_values(original.clone()));
        session.set_algorithm(algorithm);
        let report = session.start().unwrap().join().unwrap();
        assert!(report.is_completed());
        let mut expected = original.clone();
        expected.sort_unstable();
        assert_eq!(report.values, expected, "{algorithm}");
    }
}
