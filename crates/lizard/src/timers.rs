/*!
Deferred one-shot actions (boot transition, notification dismissal, power).

One worker thread per [`Timers`] owns a deadline queue. Scheduling pushes a
deadline and wakes the worker; cancelling removes the action so its queued
deadline is skipped when it comes up. Actions run on the worker with the
queue unlocked, in deadline order.
*/

use parking_lot::{Condvar, Mutex};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

type Action = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Queue {
  next_key: u64,
  deadlines: BinaryHeap<Reverse<(Instant, u64)>>,
  actions: HashMap<u64, (&'static str, Action)>,
  shutdown: bool,
}

impl Queue {
  /// Pop the earliest live action whose deadline has passed.
  /// Otherwise return how long the worker may sleep (`None` = until woken).
  fn next_due(&mut self, now: Instant) -> Result<(&'static str, Action), Option<Instant>> {
    while let Some(&Reverse((deadline, key))) = self.deadlines.peek() {
      if !self.actions.contains_key(&key) {
        self.deadlines.pop();
        continue;
      }
      if deadline > now {
        return Err(Some(deadline));
      }
      self.deadlines.pop();
      if let Some(due) = self.actions.remove(&key) {
        return Ok(due);
      }
    }
    Err(None)
  }
}

#[derive(Default)]
struct Shared {
  queue: Mutex<Queue>,
  wake: Condvar,
}

/// Pending actions owned by a desktop, all driven by a single worker thread.
pub(crate) struct Timers {
  shared: Arc<Shared>,
}

impl std::fmt::Debug for Timers {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Timers")
      .field("pending", &self.len())
      .finish_non_exhaustive()
  }
}

impl Default for Timers {
  fn default() -> Self {
    let shared = Arc::new(Shared::default());
    let worker = Arc::clone(&shared);
    thread::spawn(move || run(&worker));
    Self { shared }
  }
}

impl Drop for Timers {
  fn drop(&mut self) {
    let dropped = {
      let mut queue = self.shared.queue.lock();
      queue.shutdown = true;
      queue.deadlines.clear();
      std::mem::take(&mut queue.actions)
    };
    self.shared.wake.notify_one();
    drop(dropped);
  }
}

fn run(shared: &Shared) {
  let mut queue = shared.queue.lock();
  loop {
    if queue.shutdown {
      log::trace!("[timer] worker stopped");
      return;
    }
    match queue.next_due(Instant::now()) {
      Ok((label, action)) => {
        drop(queue);
        log::trace!("[timer] {label} fired");
        action();
        queue = shared.queue.lock();
      }
      Err(Some(deadline)) => {
        shared.wake.wait_until(&mut queue, deadline);
      }
      Err(None) => shared.wake.wait(&mut queue),
    }
  }
}

impl Timers {
  /// Run `action` on the worker once `delay` has elapsed. Returns a key for [`Timers::cancel`].
  pub(crate) fn schedule(
    &self,
    label: &'static str,
    delay: Duration,
    action: impl FnOnce() + Send + 'static,
  ) -> u64 {
    let mut queue = self.shared.queue.lock();
    queue.next_key += 1;
    let key = queue.next_key;
    queue.deadlines.push(Reverse((Instant::now() + delay, key)));
    queue.actions.insert(key, (label, Box::new(action)));
    drop(queue);
    self.shared.wake.notify_one();
    key
  }

  /// Cancel one pending action. Returns `false` if it already ran or was cancelled.
  pub(crate) fn cancel(&self, key: u64) -> bool {
    let removed = self.shared.queue.lock().actions.remove(&key);
    match removed {
      Some((label, _action)) => {
        log::trace!("[timer] {label} cancelled");
        true
      }
      None => false,
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.shared.queue.lock().actions.len()
  }

  /// Cancel everything still pending.
  pub(crate) fn cancel_all(&self) {
    let cancelled = {
      let mut queue = self.shared.queue.lock();
      queue.deadlines.clear();
      std::mem::take(&mut queue.actions)
    };
    if !cancelled.is_empty() {
      log::debug!("[timer] cancelled {} pending action(s)", cancelled.len());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicBool, Ordering};
  use std::sync::mpsc;

  #[test]
  fn fires_after_delay() {
    let timers = Timers::default();
    let (done_tx, done_rx) = mpsc::channel();
    timers.schedule("test", Duration::from_millis(5), move || {
      drop(done_tx.send(()));
    });
    assert!(done_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    assert_eq!(timers.len(), 0);
  }

  #[test]
  fn cancel_prevents_firing() {
    let timers = Timers::default();
    let fired = Arc::new(AtomicBool::new(false));
    let fired_clone = Arc::clone(&fired);
    let key = timers.schedule("test", Duration::from_millis(100), move || {
      fired_clone.store(true, Ordering::SeqCst);
    });
    assert!(timers.cancel(key));
    assert!(!timers.cancel(key));
    thread::sleep(Duration::from_millis(300));
    assert!(!fired.load(Ordering::SeqCst));
  }

  #[test]
  fn cancel_all_empties_pending() {
    let timers = Timers::default();
    timers.schedule("a", Duration::from_secs(60), || {});
    timers.schedule("b", Duration::from_secs(60), || {});
    assert_eq!(timers.len(), 2);
    timers.cancel_all();
    assert_eq!(timers.len(), 0);
  }

  #[test]
  fn runs_in_deadline_order_on_one_thread() {
    let timers = Timers::default();
    let (tx, rx) = mpsc::channel();
    for (label, ms) in [("late", 60), ("early", 10), ("middle", 30)] {
      let tx = tx.clone();
      timers.schedule(label, Duration::from_millis(ms), move || {
        drop(tx.send((label, thread::current().id())));
      });
    }
    drop(tx);

    let fired: Vec<_> = rx.iter().collect();
    let labels: Vec<_> = fired.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["early", "middle", "late"]);
    assert!(fired.iter().all(|(_, id)| *id == fired[0].1));
    assert_ne!(fired[0].1, thread::current().id());
  }

  #[test]
  fn many_actions_share_the_worker() {
    let timers = Timers::default();
    let (tx, rx) = mpsc::channel();
    for _ in 0..1_000 {
      let tx = tx.clone();
      timers.schedule("burst", Duration::from_millis(1), move || {
        drop(tx.send(thread::current().id()));
      });
    }
    drop(tx);

    let ids: Vec<_> = rx.iter().collect();
    assert_eq!(ids.len(), 1_000);
    assert!(ids.iter().all(|id| *id == ids[0]));
  }

  #[test]
  fn action_may_schedule_another() {
    let timers = Arc::new(Timers::default());
    let (tx, rx) = mpsc::channel();
    let inner = Arc::clone(&timers);
    timers.schedule("outer", Duration::from_millis(5), move || {
      inner.schedule("inner", Duration::from_millis(5), move || {
        drop(tx.send(()));
      });
    });
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
  }
}
