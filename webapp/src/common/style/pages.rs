pub const PAGE_STYLES: &str = r#"
/* Page Styles */

/* Home hero */
.hero {
  background: linear-gradient(to bottom, var(--surface), var(--neutral-50));
}

.hero .container {
  padding-top: var(--space-10);
  padding-bottom: var(--space-10);
}

.hero-grid {
  display: grid;
  gap: var(--space-8);
  align-items: center;
}

.hero-title {
  margin-top: var(--space-4);
  font-size: 1.875rem;
  font-weight: 600;
  line-height: 1.2;
  color: var(--text-primary);
}

.hero-intro {
  margin-top: var(--space-4);
  max-width: 36rem;
  color: var(--text-secondary);
}

.hero-actions {
  margin-top: var(--space-6);
}

.hero-media {
  position: relative;
}

.hero-video {
  display: grid;
  place-items: center;
  aspect-ratio: 16 / 9;
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  font-size: 3rem;
  animation: fade-up var(--transition-slow) var(--easing-standard);
}

.rating-badge {
  position: absolute;
  right: -24px;
  bottom: -24px;
  padding: var(--space-4);
  border: 1px solid var(--accent-border);
  border-radius: var(--radius-xl);
  background-color: var(--accent-light);
  box-shadow: var(--shadow-md);
  color: var(--accent-ink);
}

.rating-label {
  font-size: 0.75rem;
}

.rating-value {
  font-size: 1.125rem;
  font-weight: 600;
}

@media (min-width: 640px) {
  .hero .container {
    padding-top: var(--space-16);
    padding-bottom: var(--space-16);
  }

  .hero-title {
    font-size: 2.25rem;
  }
}

@media (min-width: 768px) {
  .hero .container {
    padding-top: var(--space-24);
    padding-bottom: var(--space-24);
  }

  .hero-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .hero-title {
    font-size: 3rem;
  }
}

/* Placeholders */
.placeholder {
  display: grid;
  place-items: center;
  background-color: var(--placeholder);
  color: var(--text-tertiary);
}

.placeholder-sm { height: 11rem; }
.placeholder-md { height: 12rem; }
.placeholder-lg { height: 14rem; }
.placeholder-xl { height: 16rem; }

.featured-work,
.product-card,
.project-card {
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
}

.featured-work {
  box-shadow: var(--shadow-sm);
}

.work-caption,
.project-caption {
  padding: var(--space-4);
}

.product-caption {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
}

.gallery-tile {
  aspect-ratio: 4 / 3;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--placeholder);
}

.team-photo {
  height: 16rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
}

.map-placeholder {
  aspect-ratio: 16 / 9;
  width: 100%;
  border-radius: var(--radius-lg);
}

/* Banners */
.consultation-banner {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-6);
  padding: var(--space-8);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background: linear-gradient(to right, var(--surface), var(--accent-light));
}

.banner-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

@media (min-width: 768px) {
  .consultation-banner {
    flex-direction: row;
  }
}

/* Company */
.check-list li {
  display: flex;
  align-items: flex-start;
  gap: var(--space-2);
  color: var(--text-body);
}

.check-list li + li {
  margin-top: var(--space-2);
}

/* Offers */
.offer-footer {
  margin-top: var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.offer-note {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* FAQ */
.faq-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.faq-item {
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  padding: var(--space-4);
}

.faq-item summary {
  font-weight: 500;
  color: var(--text-primary);
  cursor: pointer;
}

.faq-item p {
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Annual return */
.metric-value {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
}

.report-note {
  margin-top: var(--space-8);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Sitemap */
.sitemap-links {
  margin-top: var(--space-4);
  display: grid;
  gap: var(--space-4);
  font-size: 0.875rem;
}

.sitemap-links a {
  color: var(--text-body);
}

@media (min-width: 768px) {
  .sitemap-links {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }
}
"#;
