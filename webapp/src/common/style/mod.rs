use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// site chrome: header, menus, drawer, footer, toaster
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: Inter, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--fc-base);
  background-color: var(--bg-color);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--primary);
  text-decoration: none;
}

code {
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
  font-size: 0.875em;
}

ul {
  list-style: none;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

main {
  min-height: 100vh;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background-color: var(--fg-color);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(4px);
}

.header-bar {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.brand-name {
  color: var(--fc-heading);
  font-weight: 600;
  font-size: 1.125rem;
}

.brand-name:hover {
  color: var(--primary);
}

.logo-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-md);
  background-color: var(--primary);
}

.logo-mark svg {
  width: 24px;
  height: 24px;
}

.header-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

/* Desktop navigation */
.desktop-nav {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.nav-menu {
  position: relative;
}

.nav-menu-trigger {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  background: transparent;
  border: none;
  font: inherit;
  cursor: pointer;
}

.nav-menu-trigger .caret {
  transition: transform var(--transition-fast) var(--easing-standard);
}

.nav-menu.open .nav-menu-trigger .caret {
  transform: rotate(180deg);
}

.nav-menu-item {
  color: var(--fc-base);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-sm);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-menu-item:hover {
  color: var(--primary);
  background-color: var(--primary-08);
}

.nav-menu-item.active {
  color: var(--primary);
}

.nav-menu-content {
  position: absolute;
  top: calc(100% + var(--space-2));
  left: 0;
  z-index: 60;
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-3);
  width: 500px;
  padding: var(--space-4);
  background-color: var(--fg-color);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-lg);
}

.nav-menu-content.single-column {
  grid-template-columns: minmax(0, 1fr);
  width: 400px;
}

.nav-menu-link {
  display: block;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-menu-link:hover,
.nav-menu-link:focus {
  background-color: var(--primary-08);
  outline: none;
}

.nav-menu-link-title {
  color: var(--fc-heading);
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: var(--space-1);
}

.nav-menu-link-desc {
  color: var(--fc-light);
  font-size: 0.875rem;
  line-height: 1.375;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.mobile-only {
  display: none;
}

@media (max-width: 767px) {
  .desktop-nav {
    display: none;
  }

  .mobile-only {
    display: inline-flex;
  }
}

@media (max-width: 639px) {
  .brand-name,
  .header-cta {
    display: none;
  }
}

/* Mobile drawer */
.sheet-overlay {
  position: fixed;
  inset: 0;
  z-index: 70;
  background-color: var(--overlay);
}

.sheet-content {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 80;
  width: var(--drawer-width);
  padding: var(--space-6);
  overflow-y: auto;
  background-color: var(--fg-color);
  border-left: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
  animation: sheet-in var(--transition-normal) var(--easing-standard);
}

@keyframes sheet-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

.sheet-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.sheet-title {
  color: var(--fc-heading);
  font-size: 1.125rem;
  font-weight: 600;
}

.mobile-nav {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.accordion-item {
  border-bottom: 1px solid var(--border);
}

.accordion-trigger {
  display: flex;
  width: 100%;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4) 0;
  background: transparent;
  border: none;
  color: var(--fc-base);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
}

.accordion-trigger .caret {
  transition: transform var(--transition-fast) var(--easing-standard);
}

.accordion-item.open .accordion-trigger .caret {
  transform: rotate(180deg);
}

.accordion-content {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: 0 0 var(--space-4) var(--space-4);
}

.mobile-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Footer */
.site-footer {
  margin-top: var(--space-20);
  background-color: var(--bg-color-dark);
  border-top: 1px solid var(--border);
  padding: var(--space-12) 0;
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: var(--space-8);
}

.footer-grid h4 {
  color: var(--fc-heading);
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-grid li {
  margin-bottom: var(--space-2);
}

.footer-link {
  color: var(--fc-light);
  font-size: 0.875rem;
  transition: color var(--transition-fast) var(--easing-standard);
}

.footer-link:hover {
  color: var(--primary);
}

.footer-bottom {
  margin-top: var(--space-8);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  color: var(--fc-light);
  font-size: 0.875rem;
  text-align: center;
}

@media (max-width: 767px) {
  .footer-grid {
    grid-template-columns: minmax(0, 1fr);
  }
}

/* Toaster */
.toaster {
  position: fixed;
  right: var(--space-4);
  bottom: var(--space-4);
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  width: min(420px, calc(100vw - 2 * var(--space-4)));
}

.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-4);
  padding: var(--space-4);
  background-color: var(--fg-color);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-lg);
}

.toast.error {
  border-color: var(--error);
}

.toast-title {
  color: var(--fc-heading);
  font-weight: 600;
  font-size: 0.875rem;
}

.toast-description {
  color: var(--fc-light);
  font-size: 0.875rem;
}
"#
);
