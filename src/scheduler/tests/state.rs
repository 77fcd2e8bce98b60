/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tests for the single-run gate and array ownership.

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::model::Speed;
    use crate::scheduler::{RunConfig, RunOutcome, RunState, Scheduler, SchedulerError};
    use std::time::Duration;

    fn slow() -> Speed {
        Speed::new(Duration::from_millis(200))
    }

    fn fast() -> Speed {
        Speed::new(Duration::from_millis(1))
    }

    fn reversed(n: u32) -> Vec<u32> {
        (1..=n).rev().collect()
    }

    #[test]
    fn test_idle_on_creation() {
        let scheduler = Scheduler::new(vec![3, 1, 2]);
        assert_eq!(scheduler.state(), RunState::Idle);
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.values(), vec![3, 1, 2]);
        assert!(!scheduler.cancel());
    }

    #[test]
    fn test_second_start_rejected_while_running() {
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(Algorithm::BubbleSort, slow(), reversed(20)))
            .unwrap();
        assert_eq!(scheduler.state(), RunState::Running);

        let second = scheduler.start(RunConfig::new(Algorithm::QuickSort, fast(), vec![2, 1]));
        assert!(second.is_none());

        handle.cancel();
        let report = handle.join().unwrap();
        assert_eq!(report.outcome, RunOutcome::Cancelled);
        assert_eq!(report.algorithm, Algorithm::BubbleSort);
        assert_eq!(scheduler.state(), RunState::Idle);
    }

    #[test]
    fn test_replace_values_rejected_while_running() {
        let scheduler = Scheduler::new(reversed(15));
        let handle = scheduler
            .start(RunConfig::new(Algorithm::BubbleSort, slow(), reversed(15)))
            .unwrap();

        assert!(!scheduler.replace_values(vec![1, 2, 3]));
        assert_eq!(scheduler.len(), 15);

        assert!(scheduler.cancel());
        handle.join().unwrap();
        assert!(scheduler.replace_values(vec![1, 2, 3]));
        assert_eq!(scheduler.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_completed_run_commits_values() {
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(Algorithm::QuickSort, fast(), vec![5, 3, 8, 1, 9, 2]))
            .unwrap();
        let report = handle.join().unwrap();

        assert!(report.is_completed());
        assert_eq!(report.values, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(scheduler.values(), vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(scheduler.state(), RunState::Idle);
    }

    #[test]
    fn test_cancelled_run_commits_permutation() {
        let input = reversed(25);
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(Algorithm::HeapSort, slow(), input.clone()))
            .unwrap();
        std::thread::sleep(Duration::from_millis(50));
        handle.cancel();
        let report = handle.join().unwrap();

        let mut committed = scheduler.values();
        assert_eq!(committed, report.values);
        committed.sort_unstable();
        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(committed, expected);
    }

    #[test]
    fn test_restart_after_completion() {
        let scheduler = Scheduler::new(Vec::new());
        for algorithm in Algorithm::ALL {
            let handle = scheduler
                .start(RunConfig::new(algorithm, fast(), vec![4, 1, 3, 2]))
                .unwrap();
            let report = handle.join().unwrap();
            assert_eq!(report.values, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_start_sets_speed() {
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(Algorithm::QuickSort, fast(), vec![1]))
            .unwrap();
        handle.join().unwrap();
        assert_eq!(scheduler.speed(), fast());
    }

    #[test]
    fn test_listener_panic_returns_to_idle() {
        let mut scheduler = Scheduler::new(Vec::new());
        scheduler.add_listener(|frame| {
            if frame.sequence_num == 2 {
                panic!("renderer failure");
            }
        });
        let handle = scheduler
            .start(RunConfig::new(Algorithm::BubbleSort, fast(), reversed(5)))
            .unwrap();
        assert_eq!(handle.join().unwrap_err(), SchedulerError::WorkerLost);
        assert_eq!(scheduler.state(), RunState::Idle);

        // The gate is usable again.
        let handle = scheduler.start(RunConfig::new(Algorithm::BubbleSort, fast(), vec![1]));
        assert!(handle.is_some());
    }

    #[test]
    fn test_shutdown_cancels_and_joins() {
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(
                Algorithm::BubbleSort,
                Speed::new(Duration::from_secs(5)),
                reversed(30),
            ))
            .unwrap();
        scheduler.shutdown();
        assert_eq!(scheduler.state(), RunState::Idle);
        assert_eq!(handle.join().unwrap().outcome, RunOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_wait_async() {
        let scheduler = Scheduler::new(Vec::new());
        let handle = scheduler
            .start(RunConfig::new(Algorithm::MergeSort, fast(), vec![3, 1, 2]))
            .unwrap();
        let report = handle.wait().await.unwrap();
        assert!(report.is_completed());
        assert_eq!(report.values, vec![1, 2, 3]);
    }
}
