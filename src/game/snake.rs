use std::collections::VecDeque;

use super::grid::*;
use super::Drawable;
use crate::graphics::Canvas;

/// When a turn request takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPolicy {
    /// Stored and applied at the start of the next move.
    /// Releasing the key drops it.
    #[default]
    Buffered,
    /// Applied as soon as it is requested.
    Immediate,
}

impl TurnPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            TurnPolicy::Buffered => "buffered",
            TurnPolicy::Immediate => "immediate",
        }
    }
}

pub struct Snake {
    positions: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,

    /// Tail cell dropped by the last move, painted over with the
    /// background on the next frame.
    last: Option<Cell>,

    policy: TurnPolicy,
}

impl Snake {
    pub const DEFAULT_DIRECTION: Direction = Direction::Right;

    pub fn new(policy: TurnPolicy) -> Self {
        Self {
            positions: VecDeque::from([CENTER]),
            length: 1,
            direction: Self::DEFAULT_DIRECTION,
            next_direction: None,
            last: None,
            policy,
        }
    }

    /// Builds a snake from its body, head first. The target length is
    /// the body length.
    ///
    /// Panics if `body` is empty or holds a cell off the grid.
    #[cfg(test)]
    pub fn from_body(body: &[Cell], direction: Direction, policy: TurnPolicy) -> Self {
        assert!(!body.is_empty(), "A snake needs at least a head");
        assert!(
            body.iter().copied().all(is_aligned),
            "Snake body must be grid aligned: {body:?}"
        );

        Self {
            positions: body.iter().copied().collect(),
            length: body.len(),
            direction,
            next_direction: None,
            last: None,
            policy,
        }
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }

        match self.policy {
            TurnPolicy::Buffered => self.next_direction = Some(requested),
            TurnPolicy::Immediate => self.direction = requested,
        }
    }

    pub fn clear_pending(&mut self) {
        self.next_direction = None;
    }

    pub fn move_once(&mut self) {
        if let Some(next) = self.next_direction.take() {
            if next != self.direction.opposite() {
                self.direction = next;
            }
        }

        let head = self.head_position();
        let new_head = (head + self.direction.vector().scale(GRID_SIZE)) % BOARD;

        self.positions.push_front(new_head);

        self.last = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };
    }

    pub fn head_position(&self) -> Cell {
        self.positions[0]
    }

    /// Only meaningful right after [`Snake::move_once`].
    pub fn check_self_collision(&self) -> bool {
        let head = self.head_position();
        self.positions.iter().skip(1).any(|&c| c == head)
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(CENTER);
        self.direction = Self::DEFAULT_DIRECTION;
        self.next_direction = None;
        self.last = None;
    }

    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    #[cfg(test)]
    pub fn contains(&self, c: Cell) -> bool {
        self.positions.contains(&c)
    }

    /// Target length. The body catches up over the following moves.
    pub fn length(&self) -> usize {
        self.length
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<Direction> {
        self.next_direction
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<Cell> {
        self.last
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut Canvas) {
        let size = GRID_SIZE as usize;

        // The head may have moved into the tail cell it just left,
        // so the erase goes under the body.
        if let Some(p) = self.last {
            canvas.color(BOARD_BACKGROUND_COLOR);
            canvas.draw_rect_wh(p, size, size);
        }

        for &p in self.positions.iter() {
            canvas.color(SNAKE_COLOR);
            canvas.draw_rect_wh(p, size, size);
            canvas.color(BORDER_COLOR);
            canvas.draw_rect_outline_wh(p, size, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::P2;

    fn snake_at(head: Cell, direction: Direction) -> Snake {
        Snake::from_body(&[head], direction, TurnPolicy::Buffered)
    }

    #[test]
    fn starts_at_center() {
        let snake = Snake::new(TurnPolicy::Buffered);

        assert_eq!(snake.positions().len(), 1);
        assert_eq!(snake.head_position(), P2(320, 240));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.last(), None);
    }

    #[test]
    fn moves_one_cell() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.move_once();

        assert_eq!(snake.head_position(), P2(340, 240));
        assert_eq!(snake.positions().len(), 1);
        assert_eq!(snake.last(), Some(P2(320, 240)));
    }

    #[test]
    fn wraps_around_every_edge() {
        let cases = [
            (P2(620, 0), Direction::Right, P2(0, 0)),
            (P2(0, 0), Direction::Left, P2(620, 0)),
            (P2(0, 0), Direction::Up, P2(0, 460)),
            (P2(0, 460), Direction::Down, P2(0, 0)),
            (P2(620, 460), Direction::Down, P2(620, 0)),
        ];

        for (head, direction, expected) in cases {
            let mut snake = snake_at(head, direction);
            snake.move_once();
            assert_eq!(snake.head_position(), expected, "{head:?} {direction:?}");
            assert!(is_aligned(snake.head_position()));
        }
    }

    #[test]
    fn length_is_min_of_ticks_and_target() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        for _ in 0..4 {
            snake.grow();
        }

        for tick in 1..=10 {
            snake.move_once();
            assert_eq!(snake.positions().len(), usize::min(tick + 1, snake.length()));
            assert!(snake.positions().len() <= snake.length());
        }
    }

    #[test]
    fn grow_keeps_tail_for_one_move() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.move_once();
        snake.grow();
        snake.move_once();

        assert_eq!(snake.positions().len(), 2);
        assert_eq!(snake.last(), None);

        snake.move_once();
        assert_eq!(snake.positions().len(), 2);
        assert_eq!(snake.last(), Some(P2(340, 240)));
    }

    #[test]
    fn reversal_is_ignored_buffered() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.set_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending(), None);

        snake.move_once();
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn reversal_is_ignored_immediate() {
        let mut snake = Snake::new(TurnPolicy::Immediate);
        snake.set_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn buffered_turn_waits_for_move() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.set_direction(Direction::Up);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending(), Some(Direction::Up));

        snake.move_once();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending(), None);
        assert_eq!(snake.head_position(), P2(320, 220));
    }

    #[test]
    fn buffered_latest_request_wins() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);
        snake.move_once();

        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn released_key_drops_buffered_turn() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.set_direction(Direction::Up);
        snake.clear_pending();
        snake.move_once();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head_position(), P2(340, 240));
    }

    #[test]
    fn immediate_turn_applies_at_once() {
        let mut snake = Snake::new(TurnPolicy::Immediate);
        snake.set_direction(Direction::Down);

        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending(), None);

        // Down then Left within one tick: Left is no longer a reversal
        // of the current direction, so it sticks.
        snake.set_direction(Direction::Left);
        snake.clear_pending();
        snake.move_once();

        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head_position(), P2(300, 240));
    }

    #[test]
    fn self_collision_then_reset() {
        // Head at (100,100) moving right; the body curls around below it.
        let body = [
            P2(100, 100),
            P2(80, 100),
            P2(80, 120),
            P2(100, 120),
            P2(120, 120),
        ];
        let mut snake = Snake::from_body(&body, Direction::Right, TurnPolicy::Immediate);

        snake.set_direction(Direction::Down);
        snake.move_once();

        assert_eq!(snake.head_position(), P2(100, 120));
        assert_eq!(snake.head_position(), snake.positions()[4]);
        assert!(snake.check_self_collision());

        snake.reset();
        assert_eq!(snake.positions().iter().copied().collect::<Vec<_>>(), vec![CENTER]);
        assert_eq!(snake.length(), 1);
    }

    #[test]
    fn buffered_turn_into_body_collides_on_move() {
        let body = [
            P2(100, 100),
            P2(80, 100),
            P2(80, 120),
            P2(100, 120),
            P2(120, 120),
        ];
        let mut snake = Snake::from_body(&body, Direction::Right, TurnPolicy::Buffered);

        snake.set_direction(Direction::Down);
        assert!(!snake.check_self_collision());

        snake.move_once();
        assert!(snake.check_self_collision());
        assert_eq!(snake.last(), Some(P2(120, 120)));
    }

    #[test]
    fn no_collision_on_straight_line() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        for _ in 0..5 {
            snake.grow();
        }
        for _ in 0..10 {
            snake.move_once();
            assert!(!snake.check_self_collision());
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut snake = Snake::from_body(
            &[P2(0, 0), P2(20, 0), P2(40, 0)],
            Direction::Left,
            TurnPolicy::Buffered,
        );
        snake.set_direction(Direction::Up);
        snake.move_once();

        snake.reset();
        let first = (
            snake.positions().clone(),
            snake.length(),
            snake.direction(),
            snake.pending(),
            snake.last(),
        );

        snake.reset();
        let second = (
            snake.positions().clone(),
            snake.length(),
            snake.direction(),
            snake.pending(),
            snake.last(),
        );

        assert_eq!(first, second);
        assert_eq!(first.0, VecDeque::from([CENTER]));
        assert_eq!(first.1, 1);
        assert_eq!(first.3, None);
    }

    #[test]
    fn draw_paints_body_and_erases_tail() {
        let mut snake = Snake::new(TurnPolicy::Buffered);
        snake.move_once();

        let mut canvas = Canvas::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);
        canvas.color(SNAKE_COLOR);
        canvas.fill();
        snake.draw(&mut canvas);

        // Head: border on the edge, fill inside.
        assert_eq!(canvas.pixel(P2(340, 240)), Some(BORDER_COLOR));
        assert_eq!(canvas.pixel(P2(350, 250)), Some(SNAKE_COLOR));

        // Erased tail.
        assert_eq!(canvas.pixel(P2(320, 240)), Some(BOARD_BACKGROUND_COLOR));
        assert_eq!(canvas.pixel(P2(339, 259)), Some(BOARD_BACKGROUND_COLOR));
    }

    #[test]
    fn chasing_the_tail_keeps_the_head_visible() {
        // Four cells filling a 2x2 square, head at the top right, tail
        // right below it.
        let body = [P2(100, 100), P2(80, 100), P2(80, 120), P2(100, 120)];
        let mut snake = Snake::from_body(&body, Direction::Down, TurnPolicy::Buffered);

        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for (step, &turn) in turns.iter().cycle().take(8).enumerate() {
            snake.set_direction(turn);
            snake.move_once();

            let head = snake.head_position();
            assert_eq!(snake.last(), Some(head), "step {step}");
            assert!(!snake.check_self_collision(), "step {step}");
            assert_eq!(snake.positions().len(), 4);

            let mut canvas = Canvas::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);
            snake.draw(&mut canvas);

            assert_eq!(canvas.pixel(head + P2(10, 10)), Some(SNAKE_COLOR), "step {step}");
            assert_eq!(canvas.pixel(head), Some(BORDER_COLOR), "step {step}");
        }
    }
}
