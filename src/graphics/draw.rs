use super::{Canvas, P2};

impl Canvas {
    pub fn fill(&mut self) {
        self.buffer.fill(self.color);
    }

    /// Filled rectangle with its top-left corner at `p`.
    /// Anything outside the canvas is clipped.
    pub fn draw_rect_wh(&mut self, p: P2, w: usize, h: usize) {
        let xs = p.0.max(0) as usize;
        let ys = p.1.max(0) as usize;

        let xe = (p.0 + w as i32).clamp(0, self.width as i32) as usize;
        let ye = (p.1 + h as i32).clamp(0, self.height as i32) as usize;

        if xs >= xe || ys >= ye {
            return;
        }

        let color = self.color;

        self.buffer
            .chunks_exact_mut(self.width)
            .skip(ys)
            .take(ye - ys)
            .for_each(|line| line[xs..xe].fill(color));
    }

    /// One pixel wide outline drawn on the inside edge of the rectangle.
    pub fn draw_rect_outline_wh(&mut self, p: P2, w: usize, h: usize) {
        if w == 0 || h == 0 {
            return;
        }

        let (wi, hi) = (w as i32, h as i32);

        self.draw_rect_wh(p, w, 1);
        self.draw_rect_wh(P2(p.0, p.1 + hi - 1), w, 1);
        self.draw_rect_wh(p, 1, h);
        self.draw_rect_wh(P2(p.0 + wi - 1, p.1), 1, h);
    }
}
