use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const PARTICLE_COUNT: usize = 50;
const COLOURS: [Color; 6] = [
    Color::LightBlue,
    Color::Magenta,
    Color::Yellow,
    Color::Red,
    Color::Green,
    Color::Blue
];

struct Particle {
    x: f32,
    y: f32,
    drift: f32,
    fall: f32,
    colour: Color,
    symbol: char
}

/// Celebratory particle overlay shown when a winner is revealed. Purely
/// cosmetic: it owns no state anyone else reads, and the engine drops it
/// once every particle has fallen off screen.
pub struct Confetti {
    particles: Vec<Particle>,
    height: u16
}

impl Confetti {
    pub fn burst<R: Rng>(width: u16, height: u16, rng: &mut R) -> Confetti {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            particles.push(Particle {
                x: rng.random_range(0.0..width.max(1) as f32),
                y: 0.0,
                drift: rng.random_range(-0.5..0.5),
                fall: rng.random_range(0.3..0.9),
                colour: COLOURS[rng.random_range(0..COLOURS.len())],
                symbol: if rng.random_bool(0.5) { '•' } else { '▪' }
            });
        }
        Confetti { particles, height }
    }

    /// Advances every particle one tick. Returns false once the burst is
    /// spent and can be dropped.
    pub fn advance(&mut self) -> bool {
        let floor = self.height as f32;
        for particle in self.particles.iter_mut() {
            particle.y += particle.fall;
            particle.x += particle.drift;
        }
        self.particles.retain(|p| p.y < floor && p.x >= 0.0);
        !self.particles.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in self.particles.iter() {
            let x = area.x + particle.x as u16;
            let y = area.y + particle.y as u16;
            if x < area.right() && y < area.bottom() {
                buf[(x, y)]
                    .set_char(particle.symbol)
                    .set_style(Style::default().fg(particle.colour));
            }
        }
    }
}
