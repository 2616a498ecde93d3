pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Theme utilities */
.theme-bg-color { background-color: var(--bg-color); }
.theme-bg-color-dark { background-color: var(--bg-color-dark); }
.theme-fg-color { background-color: var(--fg-color); }
.theme-fg-color-dark { background-color: var(--fg-color-dark); }
.theme-fc-heading { color: var(--fc-heading); }
.theme-fc-heading-light { color: var(--fc-heading-light); }
.theme-fc-base { color: var(--fc-base); }
.theme-fc-light { color: var(--fc-light); }
.theme-fc-lighter { color: var(--fc-lighter); }
.theme-rounded { border-radius: var(--radius-md); }
.theme-rounded-sm { border-radius: var(--radius-sm); }

.bg-primary { background-color: var(--primary); }
.bg-primary-75 { background-color: var(--primary-75); }
.bg-primary-50 { background-color: var(--primary-50); }
.bg-primary-25 { background-color: var(--primary-25); }
.bg-primary-12 { background-color: var(--primary-12); }
.bg-primary-08 { background-color: var(--primary-08); }
.bg-primary-05 { background-color: var(--primary-05); }

.theme-h1, .theme-h2, .theme-h3, .theme-h4, .theme-h5, .theme-h6 {
  color: var(--fc-heading);
  font-weight: 700;
  line-height: 1.25;
}
.theme-h1 { font-size: 2rem; }
.theme-h2 { font-size: 1.75rem; }
.theme-h3 { font-size: 1.5rem; }
.theme-h4 { font-size: 1.25rem; font-weight: 600; }
.theme-h5 { font-size: 1rem; font-weight: 600; }
.theme-h6 { font-size: 0.875rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; }

/* Containers */
.container { max-width: 1280px; margin: 0 auto; padding: 0 var(--space-4); }
.container-max-sm { max-width: 512px; margin: 0 auto; padding: 0 var(--space-4); }
.container-max-tab { max-width: 768px; margin: 0 auto; padding: 0 var(--space-4); }
.container-max-md { max-width: 896px; margin: 0 auto; padding: 0 var(--space-4); }
.container-max-lg { max-width: 1024px; margin: 0 auto; padding: 0 var(--space-4); }
.container-max-xl { max-width: 1280px; margin: 0 auto; padding: 0 var(--space-4); }

/* Boxes */
.box {
  background-color: var(--fg-color);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-sm);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
  text-decoration: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px var(--primary-25);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border);
  color: var(--fc-heading);
}

.btn-outline:hover {
  background-color: var(--primary-08);
}

.btn-ghost {
  background-color: transparent;
  color: var(--fc-base);
}

.btn-ghost:hover {
  background-color: var(--primary-08);
}

.btn-icon {
  width: 36px;
  height: 36px;
  padding: 0;
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Cards */
.card {
  background-color: var(--fg-color);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
}

.card.highlighted {
  background-color: var(--primary-05);
}

.card-header {
  padding: var(--space-6) var(--space-6) var(--space-2);
}

.card-title {
  color: var(--fc-heading);
  font-weight: 600;
  font-size: 1.125rem;
}

.card-description {
  color: var(--fc-light);
  font-size: 0.875rem;
}

.card-content {
  padding: var(--space-2) var(--space-6) var(--space-6);
}

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.form-label {
  font-weight: 500;
  font-size: 0.875rem;
  color: var(--fc-heading);
}

.form-input,
.form-textarea,
.form-select {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background-color: var(--fg-color);
  color: var(--fc-base);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus,
.form-select:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-25);
  outline: none;
}

.form-input:disabled,
.form-textarea:disabled,
.form-select:disabled {
  opacity: 0.7;
}

.form-textarea {
  min-height: 120px;
  resize: none;
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  color: var(--primary);
  line-height: 1;
}

.icon-bolt::before { content: "\26A1"; }
.icon-palette::before { content: "\1F3A8"; }
.icon-database::before { content: "\1F5C4"; }
.icon-grid::before { content: "\25A6"; }
.icon-code::before { content: "</>"; font-family: monospace; font-weight: 700; }
.icon-document::before { content: "\1F4C4"; }
.icon-nextjs::before { content: "N"; font-weight: 800; }
.icon-thumbs-up::before { content: "\1F44D"; }
.icon-trend::before { content: "\1F4C8"; }
.icon-check-circle::before { content: "\2714"; }
.icon-check::before { content: "\2713"; }
.icon-cross::before { content: "\2717"; }
.icon-mail::before { content: "\2709"; }
.icon-pin::before { content: "\1F4CD"; }
.icon-clock::before { content: "\1F552"; }
.icon-chevron::before { content: "\203A"; font-size: 1.25em; }
.icon-external::before { content: "\2197"; }

.icon-tile {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-md);
  background-color: var(--primary-12);
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.icon-tile.large {
  width: 64px;
  height: 64px;
  font-size: 2rem;
  margin-left: auto;
  margin-right: auto;
}

.icon-tile.round {
  border-radius: var(--radius-full);
}
"#;
