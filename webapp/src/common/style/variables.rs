pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #111827;          /* Near-black for solid buttons and headings */
  --primary-dark: #000000;
  --accent: #F59E0B;           /* Amber accent */
  --accent-light: #FFFBEB;     /* Amber 50, banners and badges */
  --accent-border: #FDE68A;    /* Amber 200 */
  --accent-ink: #78350F;       /* Amber 900, text on amber */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;
  --placeholder: var(--neutral-100);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-body: var(--neutral-800);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--neutral-400);

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Breakpoints are repeated literally in media queries:
     640px (sm), 768px (md), 1024px (lg) */

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 12px;
  --radius-lg: 16px;
  --radius-xl: 24px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-inner: inset 0 2px 4px 0 rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
