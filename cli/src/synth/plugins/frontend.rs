//! # Shared Frontend Generators
//!
//! File: cli/src/synth/plugins/frontend.rs
//!
//! React component and browser-module templates used by both the `nextjs`
//! and `react` plugins. Each template renders TypeScript annotations only when
//! the file is `.ts`/`.tsx`.
//!
//! Preview data (prices, dashboard figures) is fixed so generated projects are
//! reproducible.
//!
use crate::core::settings::ProjectSettings;
use crate::synth::rule::{self, FileContext};

const BUTTON: &str = r#"{% if typescript %}import type { ButtonHTMLAttributes } from 'react';

type Variant = 'primary' | 'secondary';

interface {{ component_name }}Props extends ButtonHTMLAttributes<HTMLButtonElement> {
  variant?: Variant;
}

{% endif %}const variants = {
  primary: 'bg-blue-600 text-white hover:bg-blue-700',
  secondary: 'bg-gray-100 text-gray-900 hover:bg-gray-200',
};

export default function {{ component_name }}({ variant = 'primary', className = '', ...props }{% if typescript %}: {{ component_name }}Props{% endif %}) {
  return (
    <button
      className={`rounded-md px-4 py-2 font-medium ${variants[variant]} ${className}`}
      {...props}
    />
  );
}
"#;

const CARD: &str = r#"{% if typescript %}import type { ReactNode } from 'react';

interface {{ component_name }}Props {
  title: string;
  children?: ReactNode;
}

{% endif %}export default function {{ component_name }}({ title, children }{% if typescript %}: {{ component_name }}Props{% endif %}) {
  return (
    <div className="rounded-lg border bg-white p-6 shadow-sm">
      <h3 className="text-lg font-semibold">{title}</h3>
      <div className="mt-2 text-gray-600">{children}</div>
    </div>
  );
}
"#;

const FOOTER: &str = r#"export default function {{ component_name }}() {
  return (
    <footer className="border-t py-8 text-center text-sm text-gray-500">
      © {{ year }} {{ copyright_holder }}. {% if license == "none" %}All rights reserved.{% else %}Released under the {{ license_name }}.{% endif %}
    </footer>
  );
}
"#;

const HERO: &str = r##"export default function {{ component_name }}() {
  return (
    <section className="py-24 text-center">
      <h1 className="text-5xl font-bold tracking-tight">{{ name }}</h1>
      <p className="mx-auto mt-6 max-w-2xl text-lg text-gray-600">{{ description_text }}</p>
      <a href="#get-started" className="mt-8 inline-block rounded-md bg-blue-600 px-6 py-3 text-white">
        Get started
      </a>
    </section>
  );
}
"##;

const PRICING: &str = r#"const plans = [
  { name: 'Starter', price: 0, features: ['1 project', 'Community support'] },
  { name: 'Pro', price: 29, features: ['Unlimited projects', 'Priority support'] },
  { name: 'Enterprise', price: 99, features: ['SSO', 'Dedicated support'] },
];

export default function {{ component_name }}() {
  return (
    <section className="grid gap-6 md:grid-cols-3">
      {plans.map((plan) => (
        <div key={plan.name} className="rounded-lg border p-6">
          <h3 className="text-xl font-semibold">{plan.name}</h3>
          <p className="mt-2 text-3xl font-bold">${plan.price}/mo</p>
          <ul className="mt-4 space-y-2">
            {plan.features.map((feature) => (
              <li key={feature}>{feature}</li>
            ))}
          </ul>
        </div>
      ))}
    </section>
  );
}
"#;

const PRODUCT: &str = r#"{% if typescript %}export interface Product {
  id: string;
  name: string;
  price: number;
}

{% endif %}const sampleProducts = [
  { id: 'p-1', name: 'Classic Tee', price: 24 },
  { id: 'p-2', name: 'Canvas Tote', price: 18 },
  { id: 'p-3', name: 'Travel Mug', price: 15 },
];

export default function {{ component_name }}({ products = sampleProducts }{% if typescript %}: { products?: Product[] }{% endif %}) {
  return (
    <div className="grid grid-cols-2 gap-4 md:grid-cols-3">
      {products.map((product) => (
        <article key={product.id} className="rounded-lg border p-4">
          <h3 className="font-medium">{product.name}</h3>
          <p className="text-gray-600">${product.price.toFixed(2)}</p>
        </article>
      ))}
    </div>
  );
}
"#;

const CART: &str = r#"{% if client_directive %}'use client';

{% endif %}import { useState } from 'react';

const initialItems = [
  { id: 'p-1', name: 'Classic Tee', price: 24, quantity: 1 },
  { id: 'p-2', name: 'Canvas Tote', price: 18, quantity: 2 },
];

export default function {{ component_name }}() {
  const [items, setItems] = useState(initialItems);
  const total = items.reduce((sum, item) => sum + item.price * item.quantity, 0);

  return (
    <aside className="rounded-lg border p-4">
      <h2 className="text-lg font-semibold">Cart</h2>
      <ul className="mt-4 space-y-2">
        {items.map((item) => (
          <li key={item.id} className="flex justify-between">
            <span>
              {item.name} × {item.quantity}
            </span>
            <button onClick={() => setItems(items.filter((i) => i.id !== item.id))}>Remove</button>
          </li>
        ))}
      </ul>
      <p className="mt-4 font-bold">Total: ${total.toFixed(2)}</p>
    </aside>
  );
}
"#;

const STATS: &str = r#"const stats = [
  { label: 'Revenue', value: '$48,250', change: '+12.5%' },
  { label: 'Active users', value: '2,340', change: '+4.1%' },
  { label: 'Orders', value: '1,128', change: '+8.3%' },
  { label: 'Churn', value: '1.9%', change: '-0.4%' },
];

export default function {{ component_name }}() {
  return (
    <div className="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
      {stats.map((stat) => (
        <div key={stat.label} className="rounded-lg border bg-white p-4">
          <p className="text-sm text-gray-500">{stat.label}</p>
          <p className="mt-1 text-2xl font-semibold">{stat.value}</p>
          <p className="text-sm text-green-600">{stat.change}</p>
        </div>
      ))}
    </div>
  );
}
"#;

const CHART: &str = r#"const data = [
  { month: 'Jan', value: 42 },
  { month: 'Feb', value: 55 },
  { month: 'Mar', value: 61 },
  { month: 'Apr', value: 48 },
  { month: 'May', value: 73 },
  { month: 'Jun', value: 80 },
];

const barStyle = (value{% if typescript %}: number{% endif %}) => ({ height: `${value}%` });

export default function {{ component_name }}() {
  return (
    <div className="flex h-48 items-end gap-3 rounded-lg border bg-white p-4">
      {data.map((point) => (
        <div key={point.month} className="flex flex-1 flex-col items-center gap-1">
          <div className="w-full rounded-t bg-blue-500" style={barStyle(point.value)} />
          <span className="text-xs text-gray-500">{point.month}</span>
        </div>
      ))}
    </div>
  );
}
"#;

const SIDEBAR: &str = r#"const items = [
  { href: '/dashboard', label: 'Overview' },
  { href: '/dashboard/analytics', label: 'Analytics' },
  { href: '/dashboard/settings', label: 'Settings' },
];

export default function {{ component_name }}() {
  return (
    <aside className="w-60 border-r p-4">
      <p className="mb-4 font-semibold">{{ name }}</p>
      <nav className="flex flex-col gap-2">
        {items.map((item) => (
          <a key={item.href} href={item.href} className="rounded px-2 py-1 hover:bg-gray-100">
            {item.label}
          </a>
        ))}
      </nav>
    </aside>
  );
}
"#;

const UTILS: &str = r#"export function cn(...classes{% if typescript %}: Array<string | false | null | undefined>{% endif %}) {
  return classes.filter(Boolean).join(' ');
}

export function formatCurrency(amount{% if typescript %}: number{% endif %}, currency = 'USD') {
  return new Intl.NumberFormat('en-US', { style: 'currency', currency }).format(amount);
}
"#;

const API_CLIENT: &str = r#"const BASE_URL = {{ api_base_url }} ?? '';

export async function apiGet{% if typescript %}<T>{% endif %}(path{% if typescript %}: string{% endif %}){% if typescript %}: Promise<T>{% endif %} {
  const response = await fetch(`${BASE_URL}${path}`);
  if (!response.ok) {
    throw new Error(`Request failed: ${response.status}`);
  }
  return response.json();
}
"#;

const TYPES: &str = r#"export interface User {
  id: string;
  name: string;
  email: string;
}

export interface ApiResponse<T> {
  data: T;
  error?: string;
}
"#;

pub fn button(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, BUTTON)
}

pub fn card(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, CARD)
}

pub fn footer(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, FOOTER)
}

pub fn hero(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, HERO)
}

pub fn pricing(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, PRICING)
}

pub fn product(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, PRODUCT)
}

/// Cart with local state; Next.js projects get the `'use client'` directive.
pub fn cart(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render_with(file, settings, CART, |context| {
        context.insert("client_directive", &(settings.project_type == "nextjs"));
    })
}

pub fn stats(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, STATS)
}

pub fn chart(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, CHART)
}

pub fn sidebar(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, SIDEBAR)
}

pub fn utils(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, UTILS)
}

/// Fetch wrapper; the base URL variable follows the bundler's env convention.
pub fn api_client(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    let base_url = if settings.project_type == "react" {
        "import.meta.env.VITE_API_URL"
    } else {
        "process.env.NEXT_PUBLIC_API_URL"
    };
    rule::render_with(file, settings, API_CLIENT, |context| {
        context.insert("api_base_url", base_url);
    })
}

pub fn types(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    TYPES.to_string()
}
