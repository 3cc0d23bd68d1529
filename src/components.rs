// Entity model. Coordinates are board pixels; one tile is `Config::tile_size` wide.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// A rectangle that moves at a fixed speed in the direction it faces.
///
/// There is no stored velocity: it is recomputed from `direction` every time it is
/// asked for, so turning can never leave a stale velocity behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    rect: Rect,
    direction: Direction,
    speed: i32,
}

impl Mover {
    pub fn new(rect: Rect, direction: Direction, speed: i32) -> Self {
        Self {
            rect,
            direction,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn velocity(&self) -> (i32, i32) {
        let (dx, dy) = self.direction.delta();
        (dx * self.speed, dy * self.speed)
    }

    /// Applies one tick of velocity and returns the vector that was applied.
    pub fn advance(&mut self) -> (i32, i32) {
        let (vx, vy) = self.velocity();
        self.rect.x += vx;
        self.rect.y += vy;
        (vx, vy)
    }

    pub fn revert(&mut self, (vx, vy): (i32, i32)) {
        self.rect.x -= vx;
        self.rect.y -= vy;
    }

    pub fn place(&mut self, at: Point, facing: Direction) {
        self.rect.x = at.x;
        self.rect.y = at.y;
        self.direction = facing;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    rect: Rect,
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    rect: Rect,
}

impl Food {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostColor {
    Blue,
    Orange,
    Pink,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adversary {
    pub color: GhostColor,
    pub body: Mover,
}

impl Adversary {
    pub fn new(color: GhostColor, body: Mover) -> Self {
        Self { color, body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub body: Mover,
    spawn: Point,
    spawn_facing: Direction,
}

impl Player {
    pub fn new(body: Mover) -> Self {
        Self {
            spawn: body.position(),
            spawn_facing: body.direction(),
            body,
        }
    }

    pub fn spawn(&self) -> Point {
        self.spawn
    }

    pub fn spawn_facing(&self) -> Direction {
        self.spawn_facing
    }
}

/// What a map cell produces at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Wall,
    Food,
    Adversary(GhostColor),
    Player,
}
