//! Global CSS styles for Showreel.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-alt: #f7f8fa;
  --ink: #2c3e50;
  --ink-soft: #5d6d7e;

  --accent: #3498db;
  --accent-dark: #2c81ba;

  --error-border: #e74c3c;
  --neutral-border: #e1e5e9;

  --success: #27ae60;
  --danger: #e74c3c;

  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 100;
  background: var(--surface);
  border-bottom: 1px solid var(--neutral-border);
}

.nav-header-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--ink);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--ink-soft);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

/* === Hamburger === */
.hamburger {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 6px;
}

.hamburger .bar {
  width: 24px;
  height: 3px;
  background: var(--ink);
  border-radius: 2px;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.active .bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.hamburger.active .bar:nth-child(2) {
  opacity: 0;
}

.hamburger.active .bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--surface);
    border-bottom: 1px solid var(--neutral-border);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }

  .nav-menu.active {
    max-height: 320px;
  }

  .nav-menu .nav-link {
    padding: 0.9rem 1.5rem;
    border-top: 1px solid var(--neutral-border);
  }
}

/* === Hero === */
.hero {
  max-width: 1080px;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
  text-align: center;
}

.page-title {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.02em;
}

.tagline {
  margin-top: 0.75rem;
  font-size: 1.25rem;
  color: var(--ink-soft);
}

.btn-cta {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.75rem 1.75rem;
  background: var(--accent);
  color: #fff;
  border-radius: 6px;
  text-decoration: none;
  transition: background var(--transition-fast);
}

.btn-cta:hover {
  background: var(--accent-dark);
}

/* === Sections === */
.portfolio-wrap,
.about-section,
.contact-section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.section-header {
  font-size: 1.75rem;
  font-weight: 700;
  margin-bottom: 1.25rem;
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.filter-btn {
  padding: 0.45rem 1.1rem;
  border: 1px solid var(--neutral-border);
  border-radius: 999px;
  background: var(--surface);
  color: var(--ink-soft);
  cursor: pointer;
  text-transform: capitalize;
  transition: all var(--transition-fast);
}

.filter-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

/* === Video Grid === */
.video-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.video-card {
  background: var(--surface-alt);
  border: 1px solid var(--neutral-border);
  border-radius: 10px;
  overflow: hidden;
}

.video-embed {
  width: 100%;
  aspect-ratio: 16 / 9;
  background: #000;
  display: block;
}

.video-meta {
  padding: 1rem;
}

.video-title {
  font-size: 1.05rem;
  font-weight: 600;
}

.video-tags {
  margin-top: 0.5rem;
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.video-category {
  padding: 0.15rem 0.6rem;
  background: var(--accent);
  color: #fff;
  border-radius: 999px;
  font-size: 0.75rem;
  text-transform: capitalize;
}

.video-date {
  color: var(--ink-soft);
  font-size: 0.8rem;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Flash Messages === */
.flash-stack {
  position: fixed;
  top: 4.5rem;
  right: 1rem;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.flash-message {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  background: var(--ink);
  color: #fff;
  border-radius: 8px;
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
}

.flash-message.exiting {
  animation: slideOut 0.3s ease forwards;
}

@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(100%); opacity: 0; }
}

.flash-close {
  background: none;
  border: none;
  color: #fff;
  font-size: 1.1rem;
  cursor: pointer;
  line-height: 1;
}

/* === Forms === */
.contact-form,
.upload-form {
  max-width: 560px;
  margin-top: 1.5rem;
}

.form-group {
  margin-bottom: 1rem;
}

.form-label {
  display: block;
  margin-bottom: 0.35rem;
  font-weight: 600;
}

.form-input {
  width: 100%;
  padding: 0.65rem 0.85rem;
  border: 1px solid var(--neutral-border);
  border-radius: 6px;
  font: inherit;
  transition: border-color var(--transition-fast);
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.btn-submit,
.btn-upload {
  padding: 0.65rem 1.5rem;
  background: var(--accent);
  color: #fff;
  border: none;
  border-radius: 6px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-submit:hover,
.btn-upload:hover {
  background: var(--accent-dark);
}

.btn-upload:disabled {
  background: var(--ink-soft);
  cursor: not-allowed;
}

.form-ack {
  margin-top: 0.75rem;
}

.form-ack--success {
  color: var(--success);
}

.form-ack--error {
  color: var(--danger);
}

.upload-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.btn-pick {
  padding: 0.5rem 1rem;
  background: var(--surface-alt);
  border: 1px solid var(--neutral-border);
  border-radius: 6px;
  cursor: pointer;
}

.upload-filename {
  color: var(--ink-soft);
  font-size: 0.9rem;
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}
"#;
