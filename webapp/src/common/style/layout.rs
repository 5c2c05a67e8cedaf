pub const LAYOUT_STYLES: &str = r#"
/* Header */
.app-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background-color: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: inherit;
}

.brand-mark {
  width: 36px;
  height: 36px;
  border-radius: var(--radius-lg);
  background-color: #FEF3C7;
  border: 1px solid var(--accent-border);
  box-shadow: var(--shadow-inner);
}

.brand-name {
  font-weight: 600;
  line-height: 1.2;
  color: var(--text-primary);
}

.brand-suffix {
  font-size: 0.75rem;
  line-height: 1.2;
  color: var(--text-tertiary);
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-1);
}

.nav-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  color: var(--text-body);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  background-color: var(--neutral-100);
  text-decoration: none;
}

.nav-link.active {
  background-color: var(--neutral-100);
  color: var(--text-primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-cta {
  display: none;
}

.menu-toggle {
  padding: var(--space-2);
  border: none;
  background: none;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.mobile-nav {
  border-top: 1px solid var(--border);
  background-color: var(--surface);
}

.mobile-nav-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-2);
  padding: var(--space-3) 0;
}

@media (min-width: 640px) {
  .nav-cta {
    display: block;
  }
}

@media (min-width: 1024px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-nav {
    display: none;
  }
}

/* Footer */
.app-footer {
  margin-top: var(--space-20);
  border-top: 1px solid var(--border);
  background-color: var(--surface);
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
  padding: var(--space-10) 0;
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }
}

.footer-heading {
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.footer-subheading {
  font-weight: 500;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.footer-text,
.footer-list,
.detail-list {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.footer-list li + li,
.detail-list li + li {
  margin-top: var(--space-2);
}

.footer-list a {
  color: var(--text-secondary);
}

.footer-list a:hover {
  color: var(--text-primary);
}

.contact-line {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.social-links {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.footer-bottom {
  border-top: 1px solid var(--border);
}

.footer-bottom .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: var(--space-4);
  padding-bottom: var(--space-4);
  font-size: 0.75rem;
  color: var(--text-tertiary);
}
"#;
