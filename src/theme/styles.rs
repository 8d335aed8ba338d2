//! Global CSS styles for the portfolio page.
//!
//! Deep indigo night gradient with emerald and amber accents. Owns the
//! entrance keyframes; components only set the custom properties their
//! entrance hints carry.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night-indigo: #312e81;
  --night-purple: #581c87;
  --night-blue: #1e3a8a;
  --night-card: rgba(3, 7, 18, 0.6);

  /* EMERALD (Primary accent) */
  --emerald: #10b981;
  --emerald-bright: #34d399;
  --emerald-soft: #6ee7b7;

  /* AMBER (Secondary accent) */
  --amber: #fcd34d;
  --amber-soft: #fde68a;

  /* TEXT */
  --text-primary: #f3f4f6;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* BORDERS */
  --border-faint: rgba(255, 255, 255, 0.1);
  --border-soft: rgba(255, 255, 255, 0.2);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
  color: var(--text-primary);
  background: linear-gradient(
    to bottom right,
    var(--night-indigo),
    var(--night-purple),
    var(--night-blue)
  );
  min-height: 100vh;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === Site Header === */
.site-header {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 20;
  backdrop-filter: blur(12px);
  background: rgba(255, 255, 255, 0.1);
  border-bottom: 1px solid var(--border-faint);
}

.site-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.site-header__name {
  font-size: var(--text-lg);
  font-weight: 800;
  letter-spacing: 0.05em;
}

.site-nav {
  display: flex;
  gap: 1.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

.site-nav__link {
  transition: color var(--transition-fast);
}

.site-nav__link:hover {
  color: var(--emerald-soft);
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 7rem 1.5rem 8rem;
  text-align: center;
}

.hero__glow {
  position: absolute;
  left: 50%;
  top: 33%;
  transform: translateX(-50%);
  width: 60rem;
  aspect-ratio: 1;
  border-radius: 50%;
  background: var(--night-indigo);
  opacity: 0.5;
  filter: blur(200px);
  z-index: -1;
}

.hero__headline {
  font-size: var(--text-2xl);
  font-weight: 800;
  line-height: 1.15;
}

.hero__tagline {
  margin: 1.5rem auto 0;
  max-width: 42rem;
  color: var(--text-secondary);
}

.hero__cta {
  display: inline-block;
  margin-top: 2.5rem;
  padding: 0.75rem 2rem;
  border-radius: 9999px;
  background: var(--emerald);
  font-weight: 600;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.hero__cta:hover {
  background: var(--emerald-bright);
}

.hero__cta:active {
  transform: scale(0.95);
}

.accent-emerald {
  color: var(--emerald-bright);
}

.accent-amber {
  color: var(--amber);
}

/* === Sections === */
.section {
  padding: 6rem 1.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.section--skills {
  max-width: none;
  background: linear-gradient(to bottom, rgba(17, 24, 39, 0.8), rgba(31, 41, 55, 0.9));
  border-top: 1px solid var(--border-faint);
  border-bottom: 1px solid var(--border-faint);
}

.section--experience {
  max-width: 56rem;
}

.section--contact {
  max-width: none;
  background: linear-gradient(to bottom right, rgba(107, 33, 168, 0.5), rgba(55, 48, 163, 0.5));
}

.section-heading {
  text-align: center;
}

.section-heading__tagline {
  color: var(--emerald-bright);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-size: var(--text-xs);
}

.section-heading__title {
  margin-top: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 700;
}

/* === Project Cards === */
.project-grid {
  display: grid;
  gap: 3rem;
  margin-top: 3.5rem;
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.project-card {
  border-radius: 1.5rem;
  overflow: hidden;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
  transition: transform var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-8px);
}

.project-card__image {
  height: 12rem;
  width: 100%;
  object-fit: cover;
  object-position: center;
  transition: transform var(--transition-slow);
}

.project-card:hover .project-card__image {
  transform: scale(1.05);
}

/* Gradient border wrapper: 1px of gradient showing around the body */
.project-card__border {
  padding: 1px;
}

.palette-fuchsia-rose {
  background: linear-gradient(to bottom right, #d946ef, #f43f5e);
}

.palette-sky-teal {
  background: linear-gradient(to bottom right, #0ea5e9, #14b8a6);
}

.palette-lime-emerald {
  background: linear-gradient(to bottom right, #84cc16, #10b981);
}

.project-card__body {
  height: 100%;
  display: flex;
  flex-direction: column;
  border-radius: inherit;
  background: var(--night-card);
  backdrop-filter: blur(12px);
  padding: 2rem;
}

.project-card__title-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.project-card__icon {
  color: var(--emerald-soft);
  display: grid;
  place-content: center;
}

.project-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.project-card__description {
  margin-top: 1rem;
  flex: 1;
  font-size: var(--text-sm);
  line-height: 1.6;
  color: var(--text-secondary);
}

.project-card__links {
  margin-top: 1.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.project-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

.project-link:hover {
  text-decoration: underline;
}

.project-link--repo {
  color: var(--emerald-soft);
}

.project-link--demo {
  color: var(--amber);
}

.project-link__icon {
  display: grid;
  place-content: center;
}

/* === Skills Grid === */
.skill-grid {
  margin: 3rem auto 0;
  max-width: 64rem;
  display: grid;
  gap: 2rem;
  grid-template-columns: repeat(4, minmax(0, 1fr));
}

.skill-badge {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.skill-badge__icon {
  width: 3.5rem;
  height: 3.5rem;
  display: grid;
  place-content: center;
  border-radius: 1rem;
  background: rgba(55, 65, 81, 0.6);
}

.skill-badge__label {
  font-size: var(--text-sm);
  font-weight: 500;
  letter-spacing: 0.025em;
}

/* === Experience Timeline === */
.timeline {
  position: relative;
  margin-top: 3rem;
  padding-left: 2rem;
  border-left: 1px solid var(--border-soft);
}

.timeline-item {
  position: relative;
  margin-bottom: 3.5rem;
}

.timeline-item:last-child {
  margin-bottom: 0;
}

.timeline-item__dot {
  position: absolute;
  left: -2.4rem;
  top: 0.375rem;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: var(--emerald-bright);
}

.timeline-item__role {
  font-size: var(--text-lg);
  font-weight: 600;
}

.timeline-item__period {
  font-size: var(--text-sm);
  color: var(--emerald-soft);
}

.timeline-item__description {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  line-height: 1.6;
  color: var(--text-secondary);
}

/* === Contact Form === */
.contact-form {
  margin: 3rem auto 0;
  max-width: 32rem;
  display: grid;
  gap: 1.5rem;
}

.contact-form__field {
  width: 100%;
  border: none;
  border-radius: 0.75rem;
  background: var(--night-card);
  padding: 1rem;
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--text-base);
  resize: vertical;
}

.contact-form__field::placeholder {
  color: var(--text-muted);
}

.contact-form__field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--emerald-bright);
}

.contact-form__submit {
  padding: 1rem;
  border: none;
  border-radius: 0.75rem;
  background: var(--emerald);
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.contact-form__submit:hover {
  background: var(--emerald-bright);
}

.contact-form__submit:active {
  transform: scale(0.95);
}

/* === Footer === */
.site-footer {
  padding: 2.5rem 1.5rem;
  text-align: center;
  font-size: var(--text-xs);
  color: var(--text-muted);
  background: var(--night-card);
  border-top: 1px solid var(--border-faint);
}

/* === Entrance Animation === */
/* Parameterized by the custom properties an Entrance hint emits. */
@keyframes rise-in {
  from {
    opacity: 0;
    transform: translateY(var(--rise-distance, 20px));
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.rise-in {
  animation: rise-in var(--rise-duration, 800ms) ease both;
  animation-delay: var(--rise-delay, 0ms);
}

@media (prefers-reduced-motion: reduce) {
  .rise-in {
    animation: none;
  }
}

/* === Responsive === */
@media (max-width: 900px) {
  .project-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .skill-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (max-width: 640px) {
  .site-nav {
    display: none;
  }

  .hero__headline {
    font-size: var(--text-xl);
  }

  .project-grid {
    grid-template-columns: 1fr;
  }
}
"#;
