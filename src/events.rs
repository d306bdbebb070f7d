use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    FlightEnd {
        vehicle: usize,
        started_at_hours: f64,
        duration_hours: f64,
    },
    ChargeEnd {
        vehicle: usize,
        charger: usize,
        started_at_hours: f64,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct ScheduledEvent {
    pub time_hours: f64,
    pub seq: u64,
    pub event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.time_hours.total_cmp(&other.time_hours) == Ordering::Equal && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time_hours
            .total_cmp(&other.time_hours)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, time_hours: f64, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledEvent {
            time_hours,
            seq,
            event,
        }));
    }

    pub fn pop_within(&mut self, horizon_hours: f64) -> Option<ScheduledEvent> {
        match self.heap.peek() {
            Some(Reverse(next)) if next.time_hours <= horizon_hours => {
                self.heap.pop().map(|Reverse(scheduled)| scheduled)
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(vehicle: usize) -> Event {
        Event::FlightEnd {
            vehicle,
            started_at_hours: 0.0,
            duration_hours: 1.0,
        }
    }

    #[test]
    fn queue_pops_events_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(1.0, flight(0));
        queue.schedule(0.25, flight(1));
        queue.schedule(2.5, flight(2));

        let times: Vec<f64> = std::iter::from_fn(|| queue.pop_within(10.0))
            .map(|scheduled| scheduled.time_hours)
            .collect();
        assert_eq!(times, vec![0.25, 1.0, 2.5]);
    }

    #[test]
    fn simultaneous_events_pop_in_insertion_order() {
        let mut queue = EventQueue::new();
        queue.schedule(1.0, flight(7));
        queue.schedule(1.0, flight(3));
        queue.schedule(1.0, flight(5));

        let vehicles: Vec<usize> = std::iter::from_fn(|| queue.pop_within(10.0))
            .map(|scheduled| match scheduled.event {
                Event::FlightEnd { vehicle, .. } => vehicle,
                Event::ChargeEnd { vehicle, .. } => vehicle,
            })
            .collect();
        assert_eq!(vehicles, vec![7, 3, 5]);
    }

    #[test]
    fn pop_within_leaves_later_events_pending() {
        let mut queue = EventQueue::new();
        queue.schedule(2.0, flight(0));
        queue.schedule(5.0, flight(1));

        let popped = queue.pop_within(3.0).expect("event at 2.0 is due");
        assert_eq!(popped.time_hours, 2.0);
        assert!(queue.pop_within(3.0).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn events_scheduled_mid_drain_keep_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(1.0, flight(0));
        queue.pop_within(10.0).expect("event at 1.0 is due");

        queue.schedule(1.5, flight(1));
        queue.schedule(1.25, flight(2));

        let first = queue.pop_within(10.0).expect("event at 1.25 is due");
        let second = queue.pop_within(10.0).expect("event at 1.5 is due");
        assert_eq!(first.time_hours, 1.25);
        assert_eq!(second.time_hours, 1.5);
        assert!(queue.is_empty());
    }
}
