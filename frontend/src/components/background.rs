use leptos::*;

const RAIN_COLUMNS: usize = 24;
const GLYPHS: [char; 24] = [
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9', 'A', 'F',
];
const GLYPHS_PER_COLUMN: usize = 18;

// Shipped with the component; the host page carries no stylesheet for it.
const RAIN_STYLES: &str = "\
.matrix-rain{position:absolute;inset:0;z-index:0;overflow:hidden;pointer-events:none;opacity:.18}\
.matrix-rain__column{position:absolute;top:-100%;writing-mode:vertical-rl;font-family:monospace;\
color:#22c55e;animation-name:matrix-rain-fall;animation-timing-function:linear;\
animation-iteration-count:infinite}\
@keyframes matrix-rain-fall{from{transform:translateY(0)}to{transform:translateY(200vh)}}";

// Small LCG so every render produces the same rain.
fn scramble(seed: usize) -> usize {
    seed.wrapping_mul(1_103_515_245).wrapping_add(12_345) % 65_536
}

fn column_glyphs(column: usize) -> String {
    let mut seed = scramble(column + 1);
    (0..GLYPHS_PER_COLUMN)
        .map(|_| {
            seed = scramble(seed);
            GLYPHS[seed % GLYPHS.len()]
        })
        .collect()
}

fn column_style(column: usize) -> String {
    let seed = scramble(column * 7 + 3);
    let left = column * 100 / RAIN_COLUMNS;
    let delay_ms = seed % 4_000;
    let duration_ms = 4_000 + scramble(seed) % 6_000;
    format!(
        "left: {}%; animation-delay: -{}ms; animation-duration: {}ms;",
        left, delay_ms, duration_ms
    )
}

/// Decorative falling-glyph overlay. Purely visual; never intercepts input.
#[component]
pub fn MatrixBackground() -> impl IntoView {
    view! {
        <style>{RAIN_STYLES}</style>
        <div class="matrix-rain" aria-hidden="true">
            {(0..RAIN_COLUMNS)
                .map(|column| {
                    view! {
                        <span class="matrix-rain__column" style=column_style(column)>
                            {column_glyphs(column)}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_deterministic_and_spread() {
        assert_eq!(column_glyphs(3), column_glyphs(3));
        assert_eq!(column_glyphs(5).chars().count(), GLYPHS_PER_COLUMN);
        assert!(column_style(0).starts_with("left: 0%;"));
        assert!(column_style(RAIN_COLUMNS - 1).contains("left: 95%;"));
    }
}
