pub const PAGE_STYLES: &str = r#"
/* Page Styles */

/* Sections */
.page-section {
  padding: var(--space-16) 0;
}

.page-section.tinted {
  background-color: var(--bg-color-dark);
}

.section-title {
  text-align: center;
  margin-bottom: var(--space-12);
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  padding: var(--space-24) 0;
}

.hero-content {
  max-width: 768px;
  margin: 0 auto;
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  margin-bottom: var(--space-6);
  letter-spacing: -0.02em;
}

.hero-subtitle {
  color: var(--fc-light);
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
}

.hero-glow {
  position: absolute;
  top: 0;
  left: 50%;
  z-index: -1;
  width: 800px;
  height: 600px;
  transform: translateX(-50%);
  border-radius: var(--radius-full);
  background-color: var(--primary-05);
  filter: blur(64px);
}

.hero-glow.right {
  left: auto;
  right: 0;
  width: 600px;
  height: 400px;
  transform: none;
}

/* Grids */
.grid-2,
.grid-3,
.grid-4,
.grid-5,
.grid-7 {
  display: grid;
  gap: var(--space-6);
}

.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.grid-5 { grid-template-columns: repeat(5, minmax(0, 1fr)); }
.grid-7 { grid-template-columns: repeat(7, minmax(0, 1fr)); }

@media (max-width: 1023px) {
  .grid-3, .grid-4, .grid-5, .grid-7 {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (max-width: 767px) {
  .grid-2, .grid-3, .grid-4, .grid-5, .grid-7 {
    grid-template-columns: minmax(0, 1fr);
  }

  .hero-title {
    font-size: 2.25rem;
  }
}

.feature-title {
  margin-bottom: var(--space-3);
}

.feature-desc {
  color: var(--fc-light);
}

.centered {
  text-align: center;
}

/* Call to action */
.cta-box {
  max-width: 768px;
  margin: 0 auto;
  padding: var(--space-12);
  text-align: center;
  background-color: var(--primary-05);
}

.cta-box p {
  color: var(--fc-light);
  font-size: 1.125rem;
  margin-bottom: var(--space-8);
}

/* About */
.split {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-12);
  align-items: center;
  margin-bottom: var(--space-20);
}

.split p {
  margin-bottom: var(--space-4);
}

@media (max-width: 767px) {
  .split {
    grid-template-columns: minmax(0, 1fr);
  }
}

.check-list li {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  margin-bottom: var(--space-3);
  color: var(--fc-base);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-8);
}

@media (max-width: 767px) {
  .contact-grid {
    grid-template-columns: minmax(0, 1fr);
  }
}

.contact-details li {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.sidebar-stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.quick-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--fc-base);
  margin-bottom: var(--space-3);
}

.quick-link:hover {
  color: var(--primary);
}

.social-row {
  display: flex;
  gap: var(--space-3);
}

.social-link {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 40px;
  padding: 0 var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--primary-12);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
}

.social-link:hover {
  background-color: var(--primary);
  color: white;
}

/* Design system */
.doc-section {
  margin-bottom: var(--space-20);
  scroll-margin-top: calc(var(--header-height) + var(--space-4));
}

.doc-section > h2 {
  margin-bottom: var(--space-8);
}

.doc-group {
  margin-bottom: var(--space-12);
}

.doc-group > h3 {
  margin-bottom: var(--space-6);
}

.swatch-chip {
  height: 80px;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-3);
}

.text-chip {
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 600;
  font-size: 1.5rem;
  margin-bottom: var(--space-3);
}

.swatch-name {
  color: var(--fc-heading);
  font-weight: 500;
  font-size: 0.875rem;
}

.swatch-meta {
  color: var(--fc-light);
  font-size: 0.75rem;
}

.type-scale > div {
  margin-bottom: var(--space-6);
}

.token-row {
  padding: var(--space-3);
  margin-bottom: var(--space-3);
  color: var(--fc-light);
  font-size: 0.875rem;
}

.radius-sample {
  padding: var(--space-6);
  margin-bottom: var(--space-3);
  background-color: var(--primary-12);
}

.muted {
  color: var(--fc-light);
  font-size: 0.875rem;
}

/* Not found */
.not-found {
  padding: var(--space-24) 0;
  text-align: center;
}
"#;
