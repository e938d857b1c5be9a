#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pos {
    pub left: f32,
    pub top: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Pos, size: Size) -> Self {
        Self {
            left: pos.left,
            top: pos.top,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.left + other.width
            && other.left < self.left + self.width
            && self.top < other.top + other.height
            && other.top < self.top + self.height
    }
}

pub fn point_distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

pub fn center_distance(a: &Rect, b: &Rect) -> f32 {
    let (acx, acy) = a.center();
    let (bcx, bcy) = b.center();
    point_distance(acx, acy, bcx, bcy)
}
