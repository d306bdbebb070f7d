use std::collections::VecDeque;

#[derive(Debug)]
pub struct ChargerPool {
    slots: Vec<Option<usize>>,
    waiting: VecDeque<usize>,
}

impl ChargerPool {
    pub fn new(charger_count: usize) -> Self {
        Self {
            slots: vec![None; charger_count],
            waiting: VecDeque::new(),
        }
    }

    pub fn charger_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_idle(&self, slot: usize) -> bool {
        self.slots[slot].is_none()
    }

    pub fn enqueue(&mut self, vehicle: usize) {
        debug_assert!(
            !self.slots.contains(&Some(vehicle)),
            "vehicle cannot wait while occupying a slot"
        );
        self.waiting.push_back(vehicle);
    }

    pub fn dequeue_waiting(&mut self) -> Option<usize> {
        self.waiting.pop_front()
    }

    pub fn occupy(&mut self, slot: usize, vehicle: usize) {
        debug_assert!(self.slots[slot].is_none(), "slot already occupied");
        self.slots[slot] = Some(vehicle);
    }

    pub fn release(&mut self, slot: usize) {
        debug_assert!(self.slots[slot].is_some(), "released slot was idle");
        self.slots[slot] = None;
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waiting_line_is_strictly_first_in_first_out() {
        let mut pool = ChargerPool::new(1);
        pool.enqueue(3);
        pool.enqueue(1);
        pool.enqueue(2);

        assert_eq!(pool.waiting_len(), 3);
        assert_eq!(pool.dequeue_waiting(), Some(3));
        assert_eq!(pool.dequeue_waiting(), Some(1));
        assert_eq!(pool.dequeue_waiting(), Some(2));
        assert_eq!(pool.dequeue_waiting(), None);
    }

    #[test]
    fn slots_track_occupancy() {
        let mut pool = ChargerPool::new(2);
        assert_eq!(pool.charger_count(), 2);
        assert_eq!(pool.active_count(), 0);

        pool.occupy(0, 7);
        assert!(!pool.is_idle(0));
        assert!(pool.is_idle(1));
        assert_eq!(pool.active_count(), 1);

        pool.release(0);
        assert!(pool.is_idle(0));
        assert_eq!(pool.active_count(), 0);
    }
}
