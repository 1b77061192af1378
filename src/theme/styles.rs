//! Global CSS styles for System Design Deconstructed.
//!
//! Palette values come from `colors::root_variables()`, injected ahead of
//! this sheet. Motion timings that depend on presets are set inline.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography === */
:root {
  --font-sans: 'Inter', sans-serif;
  --font-mono: 'Roboto Mono', monospace;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background-color: var(--background);
  color: var(--text);
  font-family: var(--font-sans);
  scrollbar-color: var(--border) var(--background);
  scrollbar-width: thin;
}

::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: var(--background); }
::-webkit-scrollbar-thumb { background: var(--border); border-radius: 4px; }
::-webkit-scrollbar-thumb:hover { background: var(--scrollbar-hover); }

.app-root {
  font-family: var(--font-sans);
  background-color: var(--background);
  color: var(--text);
  min-height: 100vh;
}

/* === Layout === */
.desktop-container {
  display: grid;
  grid-template-columns: 320px 1fr;
  gap: 48px;
  max-width: 1280px;
  margin: 0 auto;
  padding: 48px;
}

.sidebar {
  position: sticky;
  top: 48px;
  height: calc(100vh - 96px);
  display: flex;
  flex-direction: column;
}

.mobile-main {
  padding: 24px;
}

.mobile-column {
  max-width: 768px;
  margin: 0 auto;
}

/* === Header === */
.page-header {
  margin-bottom: 32px;
}

.page-title {
  font-size: 32px;
  font-weight: 700;
  color: var(--text-bright);
  line-height: 1.2;
  margin-bottom: 8px;
}

.page-subtitle {
  font-size: 18px;
  color: var(--text-muted);
  line-height: 1.5;
  max-width: 60ch;
}

.page-header--compact .page-title { font-size: 24px; }
.page-header--compact .page-subtitle { font-size: 16px; }

/* === Interactive Demo === */
.demo-section {
  background: var(--surface);
  padding: 24px;
  border-radius: 12px;
  border: 1px solid var(--border);
  margin-bottom: 24px;
}

.demo-title {
  font-size: 16px;
  font-weight: 600;
  color: var(--text-bright);
  text-align: left;
  margin: 0 0 24px 0;
  line-height: 24px;
}

.demo-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 16px;
}

.counter-window {
  height: 64px;
  width: 120px;
  position: relative;
  overflow: hidden;
  background: var(--background);
  border-radius: 8px;
  border: 1px solid var(--border);
}

.counter-number {
  position: absolute;
  inset: 0;
  display: flex;
  justify-content: center;
  align-items: center;
  font-size: 45px;
  font-weight: 700;
  font-family: var(--font-mono);
  color: var(--text-bright);
}

.counter-number.entering:not(.dir-none) {
  animation-name: counter-enter;
  animation-fill-mode: both;
}

.counter-number.exiting {
  animation-name: counter-exit;
  animation-fill-mode: forwards;
}

@keyframes counter-enter {
  from { transform: translateY(var(--slide-from)); }
  to { transform: translateY(0); }
}

@keyframes counter-exit {
  from { transform: translateY(0); }
  to { transform: translateY(var(--slide-to)); }
}

/* === Control Button === */
.control-btn {
  width: 56px;
  height: 56px;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: transparent;
  color: var(--text);
  border: 1px solid var(--border);
  cursor: pointer;
  outline: none;
  transition: background-color 150ms, transform 150ms;
}

.control-btn:hover {
  background-color: var(--hover);
  transform: scale(1.05);
}

.control-btn:active {
  background-color: var(--pressed);
  transform: scale(0.95);
}

.control-btn:focus-visible {
  border-color: var(--text-muted);
}

/* === Navigation === */
.concept-nav {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.concept-nav-heading {
  font-size: 12px;
  font-weight: 600;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  padding: 0 12px;
  margin: 16px 0 8px 0;
}

.nav-item {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 10px 12px;
  border-radius: 8px;
  text-decoration: none;
  color: var(--text);
  transition: background-color 150ms;
  cursor: pointer;
}

.nav-item:hover {
  background-color: var(--hover);
}

.nav-text {
  font-size: 14px;
  font-weight: 500;
}

/* === Concept Card === */
.concept-card {
  background: var(--surface);
  padding: 32px;
  border-radius: 12px;
  border: 1px solid var(--border);
  margin-bottom: 32px;
  scroll-margin-top: 32px;
  opacity: 0;
  transform: translateY(var(--reveal-offset, 20px));
}

.concept-card.revealed {
  animation-name: card-reveal;
  animation-fill-mode: forwards;
}

@keyframes card-reveal {
  from { opacity: 0; transform: translateY(var(--reveal-offset, 20px)); }
  to { opacity: 1; transform: translateY(0); }
}

.card-header {
  display: flex;
  align-items: center;
  gap: 16px;
  margin-bottom: 32px;
}

.card-icon {
  background: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 8px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
}

.card-title {
  font-family: var(--font-mono);
  font-size: 20px;
  font-weight: 700;
  color: var(--text-bright);
  margin: 0;
  line-height: 28px;
}

.card-fields {
  margin-bottom: 32px;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 32px;
  text-align: left;
}

.field-label {
  font-size: 12px;
  line-height: 16px;
  font-weight: 600;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  margin-bottom: 8px;
}

.field-value {
  color: var(--text);
  font-size: 16px;
  line-height: 24px;
  margin: 0;
}

/* === Code Block (VS Code Dark+ colours) === */
.code-block {
  font-family: var(--font-mono);
  background: var(--background);
  padding: 24px;
  margin: 0;
  overflow: auto;
  border-radius: 12px;
  border: 1px solid var(--border);
  font-size: 14px;
  line-height: 1.5;
  color: #D4D4D4;
}

.code-block code {
  font-family: var(--font-mono);
  display: block;
}

.code-line {
  display: flex;
  min-height: 1.5em;
  white-space: pre;
}

.line-number {
  display: inline-block;
  min-width: 2.25em;
  padding-right: 1em;
  text-align: right;
  color: #858585;
  user-select: none;
}

.tok-comment { color: #6A9955; }
.tok-string { color: #CE9178; }
.tok-number { color: #B5CEA8; }
.tok-keyword { color: #569CD6; }
.tok-function { color: #DCDCAA; }
.tok-operator { color: #D4D4D4; }
.tok-punctuation { color: #D4D4D4; }
.tok-identifier { color: #9CDCFE; }
.tok-plain { color: #D4D4D4; }

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }

  .counter-number,
  .concept-card.revealed {
    animation: none !important;
  }

  .counter-number.exiting {
    display: none;
  }

  .concept-card {
    opacity: 1;
    transform: none;
  }
}
"#;
