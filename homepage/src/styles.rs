//! CSS styles for the homepage.
//!
//! The page ships a single inline stylesheet so the rendered `index.html`
//! stands on its own.
//!
//! # Customization
//!
//! ```rust
//! use trustcard_homepage::styles::HOMEPAGE_CSS;
//!
//! let my_css = ".doc-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, my_css);
//! assert!(combined.contains(".bento-grid"));
//! ```

/// Complete CSS for the homepage.
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --bg: #0b0d12;
    --bg-card: #141823;
    --text: #e6e8ee;
    --text-dim: #9aa3b5;
    --border: rgba(230, 232, 238, 0.1);
    --accent: #7c5cff;
    --accent-2: #22d3ee;
    --radius: 16px;
    --container-max: 1140px;
    --font: system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.row {
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
}

.hero-row {
    align-items: center;
}

.col--6 {
    flex: 1 1 420px;
}

/* Header */
.hero-banner {
    padding: 96px 0 64px;
    text-align: center;
    background: radial-gradient(circle at top, rgba(124, 92, 255, 0.25), transparent 60%);
}

.hero__title {
    font-size: 3.5rem;
    margin: 0 0 16px;
}

.hero-explainer {
    color: var(--text-dim);
    font-size: 1.25rem;
}

.buttons,
.cta-row {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
    margin-top: 24px;
}

.buttons {
    justify-content: center;
}

.button {
    display: inline-block;
    padding: 10px 20px;
    border-radius: 999px;
    font-weight: 600;
}

.button--lg {
    padding: 14px 28px;
    font-size: 1.1rem;
}

.btn-primary {
    background: linear-gradient(135deg, var(--accent), var(--accent-2));
    color: #fff;
}

.btn-secondary {
    border: 1px solid var(--border);
    background: transparent;
}

/* Hero */
.main-section {
    display: flex;
    flex-direction: column;
    gap: 72px;
    padding: 64px 0 96px;
}

.hero-title {
    font-size: 2.75rem;
    margin: 0;
}

.hero-lead {
    color: var(--text-dim);
}

/* Waves */
.wave-wrap {
    margin-top: 32px;
    padding: 20px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.wave-title {
    font-weight: 700;
    margin-bottom: 8px;
}

.wave-list {
    display: flex;
    gap: 16px;
    list-style: none;
    margin: 0;
    padding: 0;
}

.wave-item {
    display: flex;
    align-items: center;
    gap: 6px;
    color: var(--text-dim);
}

.wave-item-active {
    color: var(--text);
    font-weight: 700;
}

.wave-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: 2px solid var(--text-dim);
}

.wave-dot-active {
    background: var(--accent-2);
    border-color: var(--accent-2);
    box-shadow: 0 0 8px var(--accent-2);
}

.wave-sub-note {
    margin-top: 12px;
    font-size: 0.9rem;
    color: var(--text-dim);
}

.wave-links {
    display: flex;
    align-items: center;
    gap: 10px;
    margin-top: 8px;
}

.link-inline {
    color: var(--accent-2);
}

.bullet {
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--text-dim);
}

/* Card viewer */
.viewer-frame {
    position: relative;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.viewer-badge {
    position: absolute;
    top: 12px;
    left: 12px;
    padding: 2px 10px;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.6);
    font-size: 0.8rem;
}

.viewer-image {
    display: block;
    width: 100%;
}

.viewer-caption {
    margin-top: 12px;
    text-align: center;
}

.viewer-sim-btn {
    color: var(--accent-2);
    font-weight: 600;
}

/* Access & Growth */
.ts-block {
    padding: 40px;
    border-radius: var(--radius);
    background: var(--bg-card);
    border: 1px solid var(--border);
}

.ts-badge {
    display: inline-block;
    padding: 2px 12px;
    border-radius: 999px;
    background: rgba(124, 92, 255, 0.2);
    font-size: 0.85rem;
}

.ts-highlight {
    color: var(--accent-2);
}

.ts-lead {
    color: var(--text-dim);
}

.check-list {
    margin-top: 24px;
    padding-left: 20px;
    color: var(--text-dim);
}

/* How it works */
.block-title,
.sub-title {
    text-align: center;
    font-size: 2rem;
}

.flow-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
}

.flow-card {
    padding: 20px;
    border-radius: var(--radius);
    background: var(--bg-card);
    border: 1px solid var(--border);
}

.flow-top {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.flow-num {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    background: var(--accent);
    font-weight: 700;
}

.flow-icon {
    font-size: 1.5rem;
}

.flow-title {
    margin-top: 12px;
    font-weight: 700;
}

.flow-desc {
    color: var(--text-dim);
    font-size: 0.95rem;
}

/* Bento grid */
.bento-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    grid-auto-rows: minmax(180px, auto);
    gap: 16px;
}

.doc-card {
    position: relative;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--bg-card);
    border: 1px solid var(--border);
    overflow: hidden;
    transition: transform 0.2s ease, border-color 0.2s ease;
}

.doc-card:hover {
    transform: translateY(-2px);
    border-color: var(--accent);
}

.span-wide {
    grid-column: span 2;
}

.span-tall {
    grid-row: span 2;
}

.span-normal {
    grid-column: span 1;
}

.card-glow {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at top right, rgba(34, 211, 238, 0.12), transparent 50%);
    pointer-events: none;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.card-emoji {
    font-size: 1.75rem;
}

.card-tag {
    padding: 2px 10px;
    border-radius: 999px;
    border: 1px solid var(--border);
    font-size: 0.75rem;
    color: var(--text-dim);
}

.card-title {
    margin: 12px 0 4px;
}

.card-desc {
    margin: 0;
    color: var(--text-dim);
}

.card-arrow {
    align-self: flex-end;
    color: var(--accent-2);
}

/* Diagram */
.embed-box {
    border-radius: var(--radius);
    border: 1px solid var(--border);
    padding: 8px;
}

.embed-frame {
    border: none;
    border-radius: 12px;
}

@media (max-width: 900px) {
    .bento-grid {
        grid-template-columns: 1fr;
    }

    .span-wide,
    .span-tall {
        grid-column: auto;
        grid-row: auto;
    }

    .hero__title {
        font-size: 2.5rem;
    }
}
"#;
