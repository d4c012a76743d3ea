/// Lifecycle phase of the animated playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// No traversal armed (strategy or start node missing).
	Idle,
	/// Traversal computed, nothing revealed yet.
	Ready,
	/// A timer is driving `tick`.
	Playing,
	/// Timer stopped with the prefix retained.
	Paused,
	/// The whole sequence is revealed; the timer must be stopped.
	Complete,
}

/// Reveals a traversal sequence one node per tick.
///
/// The controller owns no timer. The hosting component drives [`tick`]
/// from whatever clock it has, so the state machine is testable without
/// wall-clock waits, and cancellation lives in exactly one place (the
/// caller's interval handle).
///
/// Invariant: `visited()` is always an order-preserving prefix of the armed
/// sequence, and its length only grows while `Playing`.
///
/// [`tick`]: Playback::tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
	sequence: Vec<String>,
	cursor: usize,
	phase: Phase,
}

impl Playback {
	/// A controller with nothing armed.
	pub fn idle() -> Self {
		Self {
			sequence: Vec::new(),
			cursor: 0,
			phase: Phase::Idle,
		}
	}

	/// Arm the controller with a freshly computed traversal sequence.
	pub fn ready(sequence: Vec<String>) -> Self {
		Self {
			sequence,
			cursor: 0,
			phase: Phase::Ready,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// The revealed prefix of the traversal sequence.
	pub fn visited(&self) -> &[String] {
		&self.sequence[..self.cursor]
	}

	pub fn is_playing(&self) -> bool {
		self.phase == Phase::Playing
	}

	/// Start or resume playback. Returns whether a timer should be running
	/// afterwards; `play` from any phase but `Ready`/`Paused` is a no-op.
	pub fn play(&mut self) -> bool {
		if matches!(self.phase, Phase::Ready | Phase::Paused) {
			self.phase = Phase::Playing;
		}
		self.is_playing()
	}

	/// Stop advancing but keep the revealed prefix.
	pub fn pause(&mut self) {
		if self.phase == Phase::Playing {
			self.phase = Phase::Paused;
		}
	}

	/// Reveal the next node. Returns whether the driving timer should keep
	/// firing; exhausting the sequence self-transitions to `Complete`.
	pub fn tick(&mut self) -> bool {
		if self.phase != Phase::Playing {
			return false;
		}
		if self.cursor < self.sequence.len() {
			self.cursor += 1;
		}
		if self.cursor == self.sequence.len() {
			self.phase = Phase::Complete;
		}
		self.is_playing()
	}

	/// Clear the revealed prefix. Falls back to `Ready` while a sequence is
	/// armed, `Idle` otherwise.
	pub fn reset(&mut self) {
		self.cursor = 0;
		self.phase = if self.sequence.is_empty() {
			Phase::Idle
		} else {
			Phase::Ready
		};
	}
}
