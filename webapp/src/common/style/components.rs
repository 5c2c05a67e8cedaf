pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  opacity: 0.9;
}

.btn:focus-visible {
  outline: 2px solid var(--border-focus);
  outline-offset: 2px;
}

.btn-solid {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

.btn-outline {
  background-color: var(--surface);
  color: var(--text-primary);
}

.btn-ghost {
  background-color: transparent;
  border-color: transparent;
  color: var(--text-primary);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-round {
  border-radius: var(--radius-lg);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
}

.card-header {
  padding: var(--space-4);
  border-bottom: 1px solid var(--border);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
}

.card-content {
  padding: var(--space-4);
}

/* Tiles: flat cards without the header/content split */
.tile {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-5);
}

.tile-sm {
  border-radius: var(--radius-lg);
  padding: var(--space-4);
}

.tile-heading {
  font-weight: 500;
  color: var(--text-primary);
}

.tile-text {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.tile-kicker {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

/* Pills */
.pill {
  display: inline-flex;
  align-items: center;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  color: var(--text-secondary);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

/* Sections */
.section {
  padding: var(--space-12) 0;
}

.section-flush {
  padding-top: 0;
}

.section-header {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.section-subtitle {
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-tertiary);
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
}

.section-body {
  margin-top: var(--space-8);
}

.section-link {
  display: flex;
  align-items: center;
  gap: var(--space-1);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.section-link:hover {
  color: var(--text-primary);
}

@media (min-width: 640px) {
  .section {
    padding: var(--space-16) 0;
  }

  .section-header {
    margin-bottom: var(--space-12);
  }

  .section-title {
    font-size: 1.875rem;
  }
}

@media (min-width: 768px) {
  .section-title {
    font-size: 2.25rem;
  }
}

/* Form Elements */
.lead-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--border-focus);
  outline: none;
}

.form-textarea {
  height: 7rem;
  resize: vertical;
}

.form-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

@media (min-width: 640px) {
  .container {
    padding: 0 var(--space-6);
  }
}

@media (min-width: 1024px) {
  .container {
    padding: 0 var(--space-8);
  }
}

.grid {
  display: grid;
  gap: var(--space-6);
}

.grid-tight {
  gap: var(--space-4);
}

.grid-wide {
  gap: var(--space-8);
}

@media (min-width: 640px) {
  .grid-sm-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 768px) {
  .grid-md-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .grid-md-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
  .grid-md-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
  .grid-md-5 { grid-template-columns: repeat(5, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
  .grid-lg-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-3);
}

.body-text {
  color: var(--text-body);
}

.muted-list {
  padding-left: var(--space-5);
  font-size: 0.875rem;
  color: var(--text-secondary);
  list-style: disc;
}

.muted-list li + li {
  margin-top: var(--space-2);
}

.icon {
  display: inline-flex;
  width: 1rem;
  justify-content: center;
}

@keyframes fade-up {
  from { transform: translateY(20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}
"#;
