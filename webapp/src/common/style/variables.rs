// theme tokens
//
// the light palette sits on :root; the dark palette overrides it when the root element
// carries data-theme="dark".  components only ever reference the variables
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #1877F2;
  --primary-75: #1877F2BF;
  --primary-50: #1877F280;
  --primary-25: #1877F240;
  --primary-12: #1877F21F;
  --primary-08: #1877F214;
  --primary-05: #1877F20D;
  --primary-dark: #1466D1;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Typography */
  --fc-heading: #262626;
  --fc-heading-light: #363636;
  --fc-base: #4D4D4D;
  --fc-light: #8C8C8C;
  --fc-lighter: #BFBFBF;

  /* Layout */
  --bg-color: #FFFFFF;
  --bg-color-dark: #F5F6F7;
  --fg-color: #FFFFFF;
  --fg-color-dark: #F0F2F5;
  --border: #E4E6EB;
  --overlay: rgba(0, 0, 0, 0.4);

  --header-height: 80px;
  --drawer-width: 300px;

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
  --radius-sm: 6px;
  --radius-md: 10px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);

  color-scheme: light;
}

:root[data-theme="dark"] {
  --primary: #4A9FFF;
  --primary-75: #4A9FFFBF;
  --primary-50: #4A9FFF80;
  --primary-25: #4A9FFF40;
  --primary-12: #4A9FFF1F;
  --primary-08: #4A9FFF14;
  --primary-05: #4A9FFF0D;
  --primary-dark: #2F8BFF;

  --fc-heading: #FAFAFA;
  --fc-heading-light: #E8E8E8;
  --fc-base: #CCCCCC;
  --fc-light: #A0A0A0;
  --fc-lighter: #808080;

  --bg-color: #18191A;
  --bg-color-dark: #111213;
  --fg-color: #242526;
  --fg-color-dark: #3A3B3C;
  --border: #3E4042;
  --overlay: rgba(0, 0, 0, 0.6);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5);

  color-scheme: dark;
}
"#;
